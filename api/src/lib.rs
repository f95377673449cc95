//! HTTP surface of the Libris backend
//!
//! The binary in `main.rs` wires repositories into [`app::AppState`] and
//! serves [`app::create_app`]; integration tests build the same app over
//! the in-memory repositories.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;

pub use app::{create_app, AppState};
