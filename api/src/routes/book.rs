//! Book resource handlers
//!
//! Reads are public; create, update and delete sit behind [`BearerAuth`].
//! `{id}` is taken as text so that a non-numeric id answers like any other
//! unknown book.

use actix_web::{web, HttpResponse};

use libris_core::repositories::{BookRepository, TokenRepository, UserRepository};
use libris_shared::types::{CreatedResponse, ErrorBody, MessageResponse, UpdatedResponse};

use crate::app::AppState;
use crate::dto::BookRequest;
use crate::handlers::book_error_response;
use crate::handlers::error::{book_json_error, BOOK_NOT_FOUND};
use crate::middleware::{Authenticated, BearerAuth};

pub const CREATED_MESSAGE: &str = "Book created successfully";
pub const DELETED_MESSAGE: &str = "Book deleted successfully";

/// The `/book` scope
///
/// `POST`, `PUT` and `PATCH` on `/book/{id}` all update.
pub fn scope<U, T, B>() -> actix_web::Scope
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    web::scope("/book")
        .app_data(web::JsonConfig::default().error_handler(book_json_error))
        .service(
            web::resource("")
                .route(web::get().to(index::<U, T, B>))
                .route(web::post().to(store::<U, T, B>).wrap(BearerAuth::new())),
        )
        .service(
            web::resource("/{id}")
                .route(web::get().to(show::<U, T, B>))
                .route(web::post().to(update::<U, T, B>).wrap(BearerAuth::new()))
                .route(web::put().to(update::<U, T, B>).wrap(BearerAuth::new()))
                .route(web::patch().to(update::<U, T, B>).wrap(BearerAuth::new()))
                .route(web::delete().to(destroy::<U, T, B>).wrap(BearerAuth::new())),
        )
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new(BOOK_NOT_FOUND))
}

/// GET /book
pub async fn index<U, T, B>(state: web::Data<AppState<U, T, B>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    match state.book_service.list().await {
        Ok(books) => HttpResponse::Ok().json(books),
        Err(error) => book_error_response(&error),
    }
}

/// POST /book
pub async fn store<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    Authenticated(context): Authenticated,
    request: web::Json<BookRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    match state.book_service.create(request.into_inner().into()).await {
        Ok(book) => {
            log::info!("User {} created book {}", context.user_id, book.id);
            HttpResponse::Created().json(CreatedResponse::new(CREATED_MESSAGE, book))
        }
        Err(error) => book_error_response(&error),
    }
}

/// GET /book/{id}
pub async fn show<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    let Some(id) = parse_id(&path) else {
        return not_found();
    };

    match state.book_service.get(id).await {
        Ok(book) => HttpResponse::Ok().json(book),
        Err(error) => book_error_response(&error),
    }
}

/// POST, PUT or PATCH /book/{id}
pub async fn update<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    Authenticated(context): Authenticated,
    path: web::Path<String>,
    request: web::Json<BookRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    let Some(id) = parse_id(&path) else {
        return not_found();
    };

    match state.book_service.update(id, request.into_inner().into()).await {
        Ok(book) => {
            log::info!("User {} updated book {}", context.user_id, book.id);
            HttpResponse::Ok().json(UpdatedResponse::new(book))
        }
        Err(error) => book_error_response(&error),
    }
}

/// DELETE /book/{id}
pub async fn destroy<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    Authenticated(context): Authenticated,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    let Some(id) = parse_id(&path) else {
        return not_found();
    };

    match state.book_service.destroy(id).await {
        Ok(()) => {
            log::info!("User {} deleted book {}", context.user_id, id);
            HttpResponse::Ok().json(MessageResponse::new(DELETED_MESSAGE))
        }
        Err(error) => book_error_response(&error),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("-1"), Some(-1));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("4.2"), None);
    }
}
