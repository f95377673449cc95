//! Domain error to HTTP response mapping
//!
//! The two route families report failures differently: auth routes always
//! answer 400 with `{"message"}`, book routes pick a status per error kind
//! and answer with `{"error"}`.

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError, UrlencodedError};
use actix_web::{Error, HttpRequest, HttpResponse};
use libris_core::errors::{AuthError, DomainError};
use libris_core::services::book::FETCH_FAILED_MESSAGE;
use libris_shared::types::{ErrorBody, MessageResponse};
use std::fmt::{Debug, Display};

pub const INVALID_DATA_PREFIX: &str = "Invalid data : ";
pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const INTERNAL_ERROR: &str = "An internal server error occurred";

/// Maps a failure on the `/user` routes
///
/// Unknown user and wrong password carry their bare message; everything
/// else is prefixed with `Invalid data : `.
pub fn auth_error_response(error: &DomainError) -> HttpResponse {
    let message = match error {
        DomainError::Auth(AuthError::UserNotFound | AuthError::PasswordMismatch) => {
            error.to_string()
        }
        DomainError::Internal { message } => {
            log::error!("Auth request failed: {}", message);
            format!("{}{}", INVALID_DATA_PREFIX, error)
        }
        _ => format!("{}{}", INVALID_DATA_PREFIX, error),
    };

    HttpResponse::BadRequest().json(MessageResponse::new(message))
}

/// Maps a failure on the `/book` routes
pub fn book_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorBody::new(message.as_str()))
        }
        DomainError::NotFound { .. } => HttpResponse::NotFound().json(ErrorBody::new(BOOK_NOT_FOUND)),
        DomainError::Internal { message } if message == FETCH_FAILED_MESSAGE => {
            HttpResponse::InternalServerError().json(ErrorBody::new(FETCH_FAILED_MESSAGE))
        }
        other => {
            log::error!("Book request failed: {}", other);
            HttpResponse::InternalServerError().json(ErrorBody::new(INTERNAL_ERROR))
        }
    }
}

fn auth_rejection<E>(error: E) -> Error
where
    E: Debug + Display + 'static,
{
    let body = MessageResponse::new(format!("{}{}", INVALID_DATA_PREFIX, error));
    InternalError::from_response(error, HttpResponse::BadRequest().json(body)).into()
}

/// `JsonConfig` error handler for the auth routes
pub fn auth_json_error(error: JsonPayloadError, _req: &HttpRequest) -> Error {
    auth_rejection(error)
}

/// `FormConfig` error handler for the auth routes
pub fn auth_form_error(error: UrlencodedError, _req: &HttpRequest) -> Error {
    auth_rejection(error)
}

/// `QueryConfig` error handler for the auth routes
pub fn auth_query_error(error: QueryPayloadError, _req: &HttpRequest) -> Error {
    auth_rejection(error)
}

/// `JsonConfig` error handler for the book routes
pub fn book_json_error(error: JsonPayloadError, _req: &HttpRequest) -> Error {
    let body = ErrorBody::new(error.to_string());
    InternalError::from_response(error, HttpResponse::BadRequest().json(body)).into()
}
