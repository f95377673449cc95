//! Shared configuration and common types for the Libris server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response envelopes for the HTTP layer

pub mod config;
pub mod types;

pub use config::{AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, ServerConfig, StorageBackend};
pub use types::{
    CreatedResponse, ErrorBody, HealthResponse, HealthStatus, MessageResponse, ServiceHealth,
    UpdatedResponse,
};
