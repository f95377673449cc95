//! Integration tests for the `/book` routes

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use libris_api::app::create_app;
use libris_shared::CorsConfig;

use common::{bearer, register_request, token_of};

#[actix_web::test]
async fn test_book_lifecycle() {
    let app = test::init_service(create_app(common::state(), &CorsConfig::development())).await;
    let registered: Value =
        test::call_and_read_body_json(&app, register_request("Fel", "fel@gmail.com").to_request()).await;
    let token = token_of(&registered);

    let list: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/book").to_request()).await;
    assert_eq!(list, json!([]));

    let req = test::TestRequest::post()
        .uri("/book")
        .insert_header(bearer(&token))
        .set_json(json!({"name": "Dune", "desc": "Spice"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["message"], "Book created successfully");
    assert_eq!(created["data"]["name"], "Dune");
    assert_eq!(created["data"]["desc"], "Spice");
    let id = created["data"]["id"].as_i64().unwrap();

    let shown: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri(&format!("/book/{}", id)).to_request(),
    )
    .await;
    assert_eq!(shown["name"], "Dune");

    let req = test::TestRequest::post()
        .uri(&format!("/book/{}", id))
        .insert_header(bearer(&token))
        .set_json(json!({"name": "Dune Messiah"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["success"], true);
    assert_eq!(updated["data"]["name"], "Dune Messiah");
    // desc untouched when the key is absent
    assert_eq!(updated["data"]["desc"], "Spice");

    let req = test::TestRequest::delete()
        .uri(&format!("/book/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Book deleted successfully");

    let req = test::TestRequest::get().uri(&format!("/book/{}", id)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_mutations_require_token() {
    let app = test::init_service(create_app(common::state(), &CorsConfig::development())).await;

    let requests = [
        test::TestRequest::post().uri("/book").set_json(json!({"name": "Dune"})),
        test::TestRequest::post().uri("/book/1").set_json(json!({"name": "Dune"})),
        test::TestRequest::put().uri("/book/1").set_json(json!({"name": "Dune"})),
        test::TestRequest::patch().uri("/book/1").set_json(json!({"name": "Dune"})),
        test::TestRequest::delete().uri("/book/1"),
    ];

    for req in requests {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Unauthenticated.");
    }

    let list: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/book").to_request()).await;
    assert_eq!(list, json!([]));
}

#[actix_web::test]
async fn test_garbage_token_is_rejected() {
    let app = test::init_service(create_app(common::state(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/book")
        .insert_header(bearer("not-a-jwt"))
        .set_json(json!({"name": "Dune"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_create_validation() {
    let app = test::init_service(create_app(common::state(), &CorsConfig::development())).await;
    let registered: Value =
        test::call_and_read_body_json(&app, register_request("Fel", "fel@gmail.com").to_request()).await;
    let token = token_of(&registered);

    let long_name = "x".repeat(256);
    let cases = [
        (json!({"desc": "orphan"}), "The name field is required."),
        (json!({"name": "   "}), "The name field is required."),
        (
            json!({"name": long_name}),
            "The name field must not be greater than 255 characters.",
        ),
    ];

    for (payload, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/book")
            .insert_header(bearer(&token))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": expected}));
    }
}

#[actix_web::test]
async fn test_malformed_json_on_book_routes() {
    let app = test::init_service(create_app(common::state(), &CorsConfig::development())).await;
    let registered: Value =
        test::call_and_read_body_json(&app, register_request("Fel", "fel@gmail.com").to_request()).await;

    let req = test::TestRequest::post()
        .uri("/book")
        .insert_header(bearer(&token_of(&registered)))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_unknown_and_non_numeric_ids() {
    let app = test::init_service(create_app(common::state(), &CorsConfig::development())).await;
    let registered: Value =
        test::call_and_read_body_json(&app, register_request("Fel", "fel@gmail.com").to_request()).await;
    let token = token_of(&registered);

    for uri in ["/book/999", "/book/abc"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Book not found"}));

        let req = test::TestRequest::delete()
            .uri(uri)
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

#[actix_web::test]
async fn test_update_checks_existence_before_validation() {
    let app = test::init_service(create_app(common::state(), &CorsConfig::development())).await;
    let registered: Value =
        test::call_and_read_body_json(&app, register_request("Fel", "fel@gmail.com").to_request()).await;
    let token = token_of(&registered);

    let req = test::TestRequest::put()
        .uri("/book/999")
        .insert_header(bearer(&token))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/book")
        .insert_header(bearer(&token))
        .set_json(json!({"name": "Dune"}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/book/{}", id))
        .insert_header(bearer(&token))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "The name field is required.");
}

#[actix_web::test]
async fn test_put_and_patch_update_like_post() {
    let app = test::init_service(create_app(common::state(), &CorsConfig::development())).await;
    let registered: Value =
        test::call_and_read_body_json(&app, register_request("Fel", "fel@gmail.com").to_request()).await;
    let token = token_of(&registered);

    let req = test::TestRequest::post()
        .uri("/book")
        .insert_header(bearer(&token))
        .set_json(json!({"name": "Dune", "desc": "Spice"}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/book/{}", created["data"]["id"].as_i64().unwrap());

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&token))
        .set_json(json!({"name": "Children of Dune", "desc": null}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["data"]["name"], "Children of Dune");
    assert!(updated["data"]["desc"].is_null());

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(bearer(&token))
        .set_json(json!({"name": "God Emperor", "desc": "Worm"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["success"], true);
    assert_eq!(updated["data"]["desc"], "Worm");

    let list: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/book").to_request()).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}
