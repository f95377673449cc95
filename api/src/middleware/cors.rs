//! CORS middleware configuration for cross-origin requests.
//!
//! Built from [`CorsConfig`]: a `*` origin (the development default) allows
//! any origin, otherwise only the listed origins are accepted.

use actix_cors::Cors;
use actix_web::http::{header::HeaderName, Method};
use libris_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse::<Method>().ok())
        .collect();
    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|h| HeaderName::try_from(h.as_str()).ok())
        .collect();

    let mut cors = Cors::default()
        .allowed_methods(methods)
        .allowed_headers(headers)
        .max_age(config.max_age);

    if config.allows_any_origin() {
        log::info!("Configuring permissive CORS (any origin)");
        return cors.allow_any_origin();
    }

    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test, web, App, HttpResponse};

    async fn ping() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_development_cors_echoes_any_origin() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&CorsConfig::development()))
                .route("/ping", web::get().to(ping)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/ping")
            .insert_header((header::ORIGIN, "https://anywhere.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_restricted_cors_rejects_unlisted_origin() {
        let config = CorsConfig {
            allowed_origins: vec!["https://books.example".to_string()],
            ..CorsConfig::default()
        };
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/ping", web::get().to(ping)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/ping")
            .insert_header((header::ORIGIN, "https://evil.example"))
            .to_request();
        let resp = test::try_call_service(&app, req).await;

        // actix-cors either errors out or omits the allow-origin header
        if let Ok(resp) = resp {
            assert!(!resp
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        }
    }
}
