//! Bearer token middleware for protecting API endpoints.
//!
//! The middleware reads `Authorization: Bearer <token>`, asks the registered
//! [`TokenVerifier`] to check it, and stores the resulting [`AuthContext`] in
//! the request extensions. Any failure answers
//! `401 {"message": "Unauthenticated."}` before the handler runs.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use libris_core::domain::value_objects::AuthContext;
use libris_core::errors::{DomainError, TokenError};
use libris_core::repositories::TokenRepository;
use libris_core::services::TokenService;
use libris_shared::types::MessageResponse;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

pub const UNAUTHENTICATED_MESSAGE: &str = "Unauthenticated.";

/// Resolves a raw bearer value into the identity it proves
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<AuthContext, DomainError>;
}

#[async_trait]
impl<R: TokenRepository + 'static> TokenVerifier for TokenService<R> {
    async fn authenticate(&self, token: &str) -> Result<AuthContext, DomainError> {
        let claims = self.verify(token).await?;
        match (claims.user_id(), claims.token_id()) {
            (Some(user_id), Some(token_id)) => Ok(AuthContext::new(user_id, token_id)),
            _ => Err(TokenError::InvalidClaims.into()),
        }
    }
}

/// Bearer authentication middleware factory
///
/// Looks up `web::Data<Arc<dyn TokenVerifier>>` in the app data at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerAuth;

impl BearerAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(token) = extract_bearer_token(&req) else {
                return Ok(reject(req));
            };

            let Some(verifier) = req
                .app_data::<web::Data<Arc<dyn TokenVerifier>>>()
                .map(|data| Arc::clone(data.get_ref()))
            else {
                log::error!("No token verifier registered; rejecting {}", req.path());
                return Ok(reject(req));
            };

            let context = match verifier.authenticate(&token).await {
                Ok(context) => context,
                Err(error) => {
                    log::warn!("Bearer token rejected on {}: {}", req.path(), error);
                    return Ok(reject(req));
                }
            };

            req.extensions_mut().insert(context);
            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts the bearer value, ignoring the scheme's case
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

fn unauthenticated_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(MessageResponse::new(UNAUTHENTICATED_MESSAGE))
}

fn reject<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
    req.into_response(unauthenticated_response())
        .map_into_right_body()
}

fn unauthenticated() -> Error {
    InternalError::from_response(UNAUTHENTICATED_MESSAGE, unauthenticated_response()).into()
}

/// Identity of the caller on routes wrapped with [`BearerAuth`]
#[derive(Debug, Clone, Copy)]
pub struct Authenticated(pub AuthContext);

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .map(Authenticated)
            .ok_or_else(unauthenticated);

        ready(result)
    }
}
