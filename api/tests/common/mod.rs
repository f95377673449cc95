//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{test, web};
use serde_json::{json, Value};

use libris_api::app::AppState;
use libris_infra::{MemoryBookRepository, MemoryHealth, MemoryTokenRepository, MemoryUserRepository};
use libris_shared::AuthConfig;

pub const PASSWORD: &str = "secret1";

pub type MemoryState = AppState<MemoryUserRepository, MemoryTokenRepository, MemoryBookRepository>;

/// Auth settings for tests: a fixed secret and the cheapest bcrypt cost
pub fn auth_config() -> AuthConfig {
    AuthConfig::new("integration-test-secret").with_bcrypt_cost(4)
}

pub fn state_with(auth: &AuthConfig) -> web::Data<MemoryState> {
    web::Data::new(AppState::new(
        MemoryUserRepository::new(),
        MemoryTokenRepository::new(),
        MemoryBookRepository::new(),
        Arc::new(MemoryHealth),
        auth,
    ))
}

pub fn state() -> web::Data<MemoryState> {
    state_with(&auth_config())
}

pub fn register_request(name: &str, email: &str) -> test::TestRequest {
    test::TestRequest::post().uri("/user/register").set_json(json!({
        "name": name,
        "email": email,
        "password": PASSWORD,
        "password_confirmation": PASSWORD,
    }))
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Pulls the `token` field out of a register or login response
pub fn token_of(body: &Value) -> String {
    body["token"]
        .as_str()
        .expect("response carries a token")
        .to_string()
}
