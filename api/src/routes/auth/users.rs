use actix_web::{web, HttpResponse};

use libris_core::repositories::{BookRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::auth_error_response;
use crate::middleware::Authenticated;

/// Handler for GET /user/users: the user behind the bearer token
pub async fn current_user<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    Authenticated(context): Authenticated,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    match state.auth_service.current_user(&context).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(error) => auth_error_response(&error),
    }
}
