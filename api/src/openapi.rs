//! OpenAPI 3 description of the HTTP surface, served at `/api-docs/openapi.json`.
//!
//! Written out by hand; keep it in step with `routes`.

use serde_json::{json, Value};

/// The complete OpenAPI document
pub fn document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Libris API",
            "description": "Book catalogue with bearer token authentication",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": paths(),
        "components": components(),
    })
}

fn paths() -> Value {
    json!({
        "/user/register": {
            "post": {
                "tags": ["auth"],
                "summary": "Register a user and issue a token",
                "requestBody": json_body("RegisterRequest"),
                "responses": {
                    "200": json_response("Registered", "RegisteredUser"),
                    "400": json_response("Invalid data", "Message"),
                },
            },
        },
        "/user/login": {
            "get": {
                "tags": ["auth"],
                "summary": "Log in with query string credentials, optionally overridden by a JSON or form body",
                "parameters": [
                    query_param("email"),
                    query_param("password"),
                ],
                "requestBody": {
                    "required": false,
                    "content": {
                        "application/json": { "schema": schema_ref("LoginRequest") },
                        "application/x-www-form-urlencoded": { "schema": schema_ref("LoginRequest") },
                    },
                },
                "responses": login_responses(),
            },
            "post": {
                "tags": ["auth"],
                "summary": "Log in with a JSON or form body",
                "requestBody": {
                    "required": true,
                    "content": {
                        "application/json": { "schema": schema_ref("LoginRequest") },
                        "application/x-www-form-urlencoded": { "schema": schema_ref("LoginRequest") },
                    },
                },
                "responses": login_responses(),
            },
        },
        "/user/logout": {
            "post": {
                "tags": ["auth"],
                "summary": "Revoke the presented token",
                "security": [{ "bearerAuth": [] }],
                "responses": {
                    "200": json_response("Logged out", "Message"),
                    "400": json_response("Revocation failed", "Message"),
                    "401": json_response("Unauthenticated", "Message"),
                },
            },
        },
        "/user/users": {
            "get": {
                "tags": ["auth"],
                "summary": "The user behind the presented token",
                "security": [{ "bearerAuth": [] }],
                "responses": {
                    "200": json_response("Current user", "User"),
                    "401": json_response("Unauthenticated", "Message"),
                },
            },
        },
        "/book": {
            "get": {
                "tags": ["book"],
                "summary": "List all books",
                "responses": {
                    "200": {
                        "description": "All books",
                        "content": { "application/json": { "schema": {
                            "type": "array",
                            "items": schema_ref("Book"),
                        } } },
                    },
                    "500": json_response("Store failure", "Error"),
                },
            },
            "post": {
                "tags": ["book"],
                "summary": "Create a book",
                "security": [{ "bearerAuth": [] }],
                "requestBody": json_body("BookRequest"),
                "responses": {
                    "201": json_response("Created", "BookCreated"),
                    "400": json_response("Validation failure", "Error"),
                    "401": json_response("Unauthenticated", "Message"),
                },
            },
        },
        "/book/{id}": {
            "parameters": [{
                "name": "id",
                "in": "path",
                "required": true,
                "schema": { "type": "integer", "format": "int64" },
            }],
            "get": {
                "tags": ["book"],
                "summary": "Show a book",
                "responses": {
                    "200": json_response("The book", "Book"),
                    "404": json_response("Book not found", "Error"),
                },
            },
            "post": update_operation(),
            "put": update_operation(),
            "patch": update_operation(),
            "delete": {
                "tags": ["book"],
                "summary": "Delete a book",
                "security": [{ "bearerAuth": [] }],
                "responses": {
                    "200": json_response("Deleted", "Message"),
                    "401": json_response("Unauthenticated", "Message"),
                    "404": json_response("Book not found", "Error"),
                },
            },
        },
        "/health": {
            "get": {
                "tags": ["ops"],
                "summary": "Service and backing store health",
                "responses": {
                    "200": { "description": "Healthy or degraded" },
                    "503": { "description": "Backing store unreachable" },
                },
            },
        },
    })
}

fn components() -> Value {
    json!({
        "securitySchemes": {
            "bearerAuth": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" },
        },
        "schemas": {
            "RegisterRequest": {
                "type": "object",
                "required": ["name", "email", "password", "password_confirmation"],
                "properties": {
                    "name": { "type": "string", "maxLength": 255 },
                    "email": { "type": "string", "format": "email", "maxLength": 255 },
                    "password": { "type": "string", "minLength": 6 },
                    "password_confirmation": { "type": "string" },
                },
            },
            "LoginRequest": {
                "type": "object",
                "required": ["email", "password"],
                "properties": {
                    "email": { "type": "string", "format": "email", "maxLength": 255 },
                    "password": { "type": "string", "minLength": 6 },
                },
            },
            "RegisteredUser": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "email": { "type": "string" },
                    "token": { "type": "string" },
                },
            },
            "LoggedInUser": {
                "type": "object",
                "properties": {
                    "email": { "type": "string" },
                    "token": { "type": "string" },
                },
            },
            "User": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "format": "int64" },
                    "name": { "type": "string" },
                    "email": { "type": "string" },
                    "created_at": { "type": "string", "format": "date-time" },
                    "updated_at": { "type": "string", "format": "date-time" },
                },
            },
            "BookRequest": {
                "type": "object",
                "required": ["name"],
                "properties": {
                    "name": { "type": "string", "maxLength": 255 },
                    "desc": { "type": "string", "nullable": true },
                },
            },
            "Book": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "format": "int64" },
                    "name": { "type": "string" },
                    "desc": { "type": "string", "nullable": true },
                    "created_at": { "type": "string", "format": "date-time" },
                    "updated_at": { "type": "string", "format": "date-time" },
                },
            },
            "BookCreated": {
                "type": "object",
                "properties": {
                    "message": { "type": "string" },
                    "data": schema_ref("Book"),
                },
            },
            "BookUpdated": {
                "type": "object",
                "properties": {
                    "success": { "type": "boolean" },
                    "data": schema_ref("Book"),
                },
            },
            "Message": {
                "type": "object",
                "properties": { "message": { "type": "string" } },
            },
            "Error": {
                "type": "object",
                "properties": { "error": { "type": "string" } },
            },
        },
    })
}

fn update_operation() -> Value {
    json!({
        "tags": ["book"],
        "summary": "Update a book",
        "security": [{ "bearerAuth": [] }],
        "requestBody": json_body("BookRequest"),
        "responses": {
            "200": json_response("Updated", "BookUpdated"),
            "400": json_response("Validation failure", "Error"),
            "401": json_response("Unauthenticated", "Message"),
            "404": json_response("Book not found", "Error"),
        },
    })
}

fn login_responses() -> Value {
    json!({
        "200": json_response("Logged in", "LoggedInUser"),
        "400": json_response("Unknown user, wrong password or invalid data", "Message"),
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

fn json_body(schema: &str) -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": schema_ref(schema) } },
    })
}

fn json_response(description: &str, schema: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema_ref(schema) } },
    })
}

fn query_param(name: &str) -> Value {
    json!({ "name": name, "in": "query", "required": false, "schema": { "type": "string" } })
}
