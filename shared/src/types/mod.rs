//! Type definitions shared across crates
//!
//! - `response` - JSON envelopes and health checks

pub mod response;

pub use response::{
    CreatedResponse, ErrorBody, HealthResponse, HealthStatus, MessageResponse, ServiceHealth,
    UpdatedResponse,
};
