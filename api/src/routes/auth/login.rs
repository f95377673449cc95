use actix_web::{web, Either, HttpResponse};

use libris_core::repositories::{BookRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::LoginRequest;
use crate::handlers::auth_error_response;

/// Handler for POST /user/login, with a JSON or form body
pub async fn login<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    request: Either<web::Json<LoginRequest>, web::Form<LoginRequest>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    let request = match request {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };
    authenticate(&state, request).await
}

/// Handler for GET /user/login
///
/// Credentials come from the query string, from an optional JSON or form
/// body, or from both; body fields take precedence. A body that does not
/// parse is ignored.
pub async fn login_query<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    query: web::Query<LoginRequest>,
    body: Option<Either<web::Json<LoginRequest>, web::Form<LoginRequest>>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    let query = query.into_inner();
    let request = match body {
        Some(Either::Left(json)) => query.merged_with(json.into_inner()),
        Some(Either::Right(form)) => query.merged_with(form.into_inner()),
        None => query,
    };
    authenticate(&state, request).await
}

async fn authenticate<U, T, B>(state: &AppState<U, T, B>, request: LoginRequest) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    match state.auth_service.login(request.into()).await {
        Ok(logged_in) => {
            log::info!("User {} logged in", logged_in.user_id);
            HttpResponse::Ok().json(logged_in)
        }
        Err(error) => {
            log::info!("Login rejected: {}", error);
            auth_error_response(&error)
        }
    }
}
