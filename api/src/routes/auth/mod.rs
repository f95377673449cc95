//! Authentication route handlers
//!
//! Registration, login (JSON, form or query string), logout and the
//! current-user lookup, all under `/user`.

pub mod login;
pub mod logout;
pub mod register;
pub mod users;

use actix_web::web;

use libris_core::repositories::{BookRepository, TokenRepository, UserRepository};

use crate::handlers::error::{auth_form_error, auth_json_error, auth_query_error};
use crate::middleware::BearerAuth;

/// The `/user` scope with its extractor error handlers
pub fn scope<U, T, B>() -> actix_web::Scope
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    B: BookRepository + 'static,
{
    web::scope("/user")
        .app_data(web::JsonConfig::default().error_handler(auth_json_error))
        .app_data(web::FormConfig::default().error_handler(auth_form_error))
        .app_data(web::QueryConfig::default().error_handler(auth_query_error))
        .route("/register", web::post().to(register::register::<U, T, B>))
        .route("/login", web::get().to(login::login_query::<U, T, B>))
        .route("/login", web::post().to(login::login::<U, T, B>))
        .route(
            "/logout",
            web::post()
                .to(logout::logout::<U, T, B>)
                .wrap(BearerAuth::new()),
        )
        .route(
            "/users",
            web::get()
                .to(users::current_user::<U, T, B>)
                .wrap(BearerAuth::new()),
        )
}
