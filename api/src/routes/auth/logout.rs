use actix_web::{web, HttpResponse};

use libris_core::repositories::{BookRepository, TokenRepository, UserRepository};
use libris_shared::types::MessageResponse;

use crate::app::AppState;
use crate::handlers::auth_error_response;
use crate::middleware::Authenticated;

pub const LOGGED_OUT_MESSAGE: &str = "You Have been successfully logged out!";

/// Handler for POST /user/logout
///
/// Revokes the bearer token that authenticated this request. Other tokens of
/// the same user stay valid.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid or already revoked token
pub async fn logout<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    Authenticated(context): Authenticated,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    match state.auth_service.logout(&context).await {
        Ok(()) => {
            log::info!("User {} logged out", context.user_id);
            HttpResponse::Ok().json(MessageResponse::new(LOGGED_OUT_MESSAGE))
        }
        Err(error) => auth_error_response(&error),
    }
}
