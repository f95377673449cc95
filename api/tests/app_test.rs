//! Integration tests for app-level routes and the bearer gate

mod common;

use actix_web::{http::StatusCode, test, web, App, HttpResponse};
use serde_json::{json, Value};

use libris_api::app::create_app;
use libris_api::middleware::{Authenticated, BearerAuth};
use libris_core::TokenKind;
use libris_shared::{AuthConfig, CorsConfig};

use common::{bearer, register_request, token_of};

#[actix_web::test]
async fn test_health_reports_store() {
    let app = test::init_service(create_app(common::state(), &CorsConfig::development())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["memory"]["status"], "healthy");
    assert!(body["version"].is_string());
}

#[actix_web::test]
async fn test_openapi_document_is_served() {
    let app = test::init_service(create_app(common::state(), &CorsConfig::development())).await;

    let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["openapi"], "3.0.3");
    assert!(body["paths"]["/user/register"]["post"].is_object());
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let app = test::init_service(create_app(common::state(), &CorsConfig::development())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/nowhere").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let mut auth = common::auth_config();
    auth.token_ttl_days = -1;
    let state = common::state_with(&auth);
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let registered: Value =
        test::call_and_read_body_json(&app, register_request("Fel", "fel@gmail.com").to_request()).await;
    // the long-lived registration token still works
    let req = test::TestRequest::get()
        .uri("/user/users")
        .insert_header(bearer(&token_of(&registered)))
        .to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;
    let user_id = user["id"].as_i64().unwrap();

    let expired = state
        .auth_service
        .token_service()
        .issue(user_id, TokenKind::Standard)
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/user/users")
        .insert_header(bearer(&expired.access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_configured_standard_tokens_follow_their_ttl() {
    let mut auth = common::auth_config().with_issued_token_kind("standard");
    auth.token_ttl_days = -1;
    let app = test::init_service(create_app(common::state_with(&auth), &CorsConfig::development())).await;

    let resp = test::call_service(&app, register_request("Fel", "fel@gmail.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let registered: Value = test::read_body_json(resp).await;

    // issued as a standard token that is already past its lifetime
    let req = test::TestRequest::get()
        .uri("/user/users")
        .insert_header(bearer(&token_of(&registered)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_token_from_another_secret_is_rejected() {
    let foreign = common::state_with(&AuthConfig::new("some-other-secret").with_bcrypt_cost(4));
    let foreign_app =
        test::init_service(create_app(foreign, &CorsConfig::development())).await;
    let registered: Value = test::call_and_read_body_json(
        &foreign_app,
        register_request("Fel", "fel@gmail.com").to_request(),
    )
    .await;

    let app = test::init_service(create_app(common::state(), &CorsConfig::development())).await;
    let req = test::TestRequest::get()
        .uri("/user/users")
        .insert_header(bearer(&token_of(&registered)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_gate_without_verifier_rejects() {
    async fn protected(Authenticated(context): Authenticated) -> HttpResponse {
        HttpResponse::Ok().json(json!({"user_id": context.user_id}))
    }

    let app = test::init_service(
        App::new().route("/protected", web::get().to(protected).wrap(BearerAuth::new())),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(bearer("anything"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_extractor_without_gate_rejects() {
    async fn protected(Authenticated(context): Authenticated) -> HttpResponse {
        HttpResponse::Ok().json(json!({"user_id": context.user_id}))
    }

    let app = test::init_service(App::new().route("/protected", web::get().to(protected))).await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/protected").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Unauthenticated.");
}
