use actix_web::{web, HttpResponse};

use libris_core::repositories::{BookRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::RegisterRequest;
use crate::handlers::auth_error_response;

/// Handler for POST /user/register
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Fel",
///     "email": "fel@gmail.com",
///     "password": "secret1",
///     "password_confirmation": "secret1"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "name": "Fel", "email": "fel@gmail.com", "token": "eyJ..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `{"message": "Invalid data : <first failing rule>"}`
pub async fn register<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    match state.auth_service.register(request.into_inner().into()).await {
        Ok(registered) => {
            log::info!("Registered user {}", registered.user_id);
            HttpResponse::Ok().json(registered)
        }
        Err(error) => {
            log::info!("Registration rejected: {}", error);
            auth_error_response(&error)
        }
    }
}
