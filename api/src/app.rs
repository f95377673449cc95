//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_web::{middleware::Logger, web, App, HttpResponse};

use libris_core::repositories::{BookRepository, HealthCheck, TokenRepository, UserRepository};
use libris_core::services::{
    AuthService, AuthServiceConfig, BcryptHasher, BookService, TokenService, TokenServiceConfig,
};
use libris_shared::types::{ErrorBody, HealthResponse, HealthStatus, ServiceHealth};
use libris_shared::{AuthConfig, CorsConfig};

use crate::middleware::{cors::create_cors, TokenVerifier};
use crate::{openapi, routes};

const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Shared services handed to every handler through `web::Data`
pub struct AppState<U, T, B>
where
    U: UserRepository,
    T: TokenRepository,
    B: BookRepository,
{
    pub auth_service: Arc<AuthService<U, T>>,
    pub book_service: Arc<BookService<B>>,
    /// Probe for the backing store, reported by `/health`
    pub health: Arc<dyn HealthCheck>,
}

impl<U, T, B> AppState<U, T, B>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    /// Wire the services over a set of repositories
    pub fn new(users: U, tokens: T, books: B, health: Arc<dyn HealthCheck>, auth: &AuthConfig) -> Self {
        let token_service = Arc::new(TokenService::new(tokens, TokenServiceConfig::from(auth)));
        let auth_service = AuthService::new(
            Arc::new(users),
            token_service,
            BcryptHasher::new(auth.bcrypt_cost),
            AuthServiceConfig::from(auth),
        );

        Self {
            auth_service: Arc::new(auth_service),
            book_service: Arc::new(BookService::new(Arc::new(books))),
            health,
        }
    }

    /// The token service seen through the middleware's verifier seam
    pub fn token_verifier(&self) -> Arc<dyn TokenVerifier> {
        self.auth_service.token_service().clone()
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, T, B>(
    app_state: web::Data<AppState<U, T, B>>,
    cors: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    let verifier = web::Data::new(app_state.token_verifier());

    App::new()
        .app_data(app_state)
        .app_data(verifier)
        .wrap(Logger::default())
        .wrap(create_cors(cors))
        .route("/health", web::get().to(health_check::<U, T, B>))
        .route("/api-docs/openapi.json", web::get().to(api_documentation))
        .service(routes::auth::scope::<U, T, B>())
        .service(routes::book::scope::<U, T, B>())
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
///
/// Answers 503 when the backing store does not respond in time.
async fn health_check<U, T, B>(state: web::Data<AppState<U, T, B>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    let started = Instant::now();
    let probe = match tokio::time::timeout(HEALTH_PROBE_TIMEOUT, state.health.ping()).await {
        Ok(Ok(())) => ServiceHealth::healthy(started.elapsed().as_millis() as u64),
        Ok(Err(error)) => {
            log::warn!("Health probe for {} failed: {}", state.health.name(), error);
            ServiceHealth::unhealthy(error.to_string())
        }
        Err(_) => ServiceHealth::unhealthy("probe timed out"),
    };

    let mut services = HashMap::new();
    services.insert(state.health.name().to_string(), probe);
    let report = HealthResponse::from_services(services, env!("CARGO_PKG_VERSION"));

    if report.status == HealthStatus::Unhealthy {
        HttpResponse::ServiceUnavailable().json(report)
    } else {
        HttpResponse::Ok().json(report)
    }
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(openapi::document())
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(
        ErrorBody::new("not_found").with_message("The requested resource was not found"),
    )
}
