use crate::tests::utils::{body_json, send, signed_in, test_server};
use http::Method;
use serde_json::json;

#[test]
fn register_then_login_returns_token_and_user() {
    let server = test_server();
    let ctx = &server.ctx;

    let resp = send(
        ctx,
        Method::POST,
        "/api/auth/registro",
        None,
        Some(json!({"email": "Ana@Correo.mx", "password": "secreto123", "nombre": "Ana"})),
    );
    assert_eq!(resp.status(), 201);
    let body = body_json(resp);
    assert_eq!(body["message"], "User registered");
    assert_eq!(body["usuario"]["email"], "ana@correo.mx");
    assert!(body["usuario"].get("password_hash").is_none());

    let resp = send(
        ctx,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"username": "ana@correo.mx", "password": "secreto123"})),
    );
    assert_eq!(resp.status(), 200);
    let body = body_json(resp);
    assert_eq!(body["token"].as_str().unwrap().split('.').count(), 3);
    assert_eq!(body["usuario"]["nombre"], "Ana");
}

#[test]
fn duplicate_registration_conflicts() {
    let server = test_server();
    signed_in(&server.ctx, "dup@correo.mx");

    let resp = send(
        &server.ctx,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({"email": "DUP@correo.mx", "password": "otraclave"})),
    );
    assert_eq!(resp.status(), 409);
    assert_eq!(body_json(resp)["message"], "User already exists");
}

#[test]
fn registration_rejects_short_password() {
    let server = test_server();
    let resp = send(
        &server.ctx,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({"email": "corto@correo.mx", "password": "123"})),
    );
    assert_eq!(resp.status(), 400);
    assert_eq!(
        body_json(resp)["message"],
        "Password must be at least 6 characters"
    );
}

#[test]
fn login_failures_are_bad_requests() {
    let server = test_server();
    let ctx = &server.ctx;
    signed_in(ctx, "luis@correo.mx");

    let resp = send(
        ctx,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"email": "nadie@correo.mx", "password": "secreto123"})),
    );
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["message"], "User not found");

    let resp = send(
        ctx,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"email": "luis@correo.mx", "password": "equivocada"})),
    );
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["message"], "Incorrect password");
}

#[test]
fn malformed_json_is_rejected() {
    let server = test_server();
    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .body(astra::Body::from("{not json"))
        .unwrap();
    let resp = crate::router::respond(req, &server.ctx);
    assert_eq!(resp.status(), 400);
}
