use crate::auth::TokenSigner;
use crate::db::{init_db, Database};
use crate::router::{respond, AppContext};
use astra::{Body, Response};
use http::{Method, Request};
use serde_json::{json, Value};
use std::io::Read;
use tempfile::TempDir;

pub const TEST_SECRET: &[u8] = b"test-secret";

/// A server context backed by a throwaway database file. Keep it alive for
/// the whole test; the directory goes away on drop.
pub struct TestServer {
    pub ctx: AppContext,
    _dir: TempDir,
}

/// Initialize a fresh test DB using the production schema
pub fn test_server() -> TestServer {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("agencia_test.sqlite3");
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    TestServer {
        ctx: AppContext::new(db, TokenSigner::new(TEST_SECRET, 3600), false),
        _dir: dir,
    }
}

pub fn send(
    ctx: &AppContext,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header("Authorization", format!("Bearer {t}"));
    }
    let req = match body {
        Some(v) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    respond(req, ctx)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}

pub fn body_json(resp: Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("JSON body")
}

pub fn content_type(resp: &Response) -> String {
    resp.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Registers `email` with a known password and returns a bearer token.
pub fn signed_in(ctx: &AppContext, email: &str) -> String {
    let resp = send(
        ctx,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({"email": email, "password": "secreto123", "nombre": "Ana", "telefono": "5512345678"})),
    );
    assert_eq!(resp.status(), 201);

    let resp = send(
        ctx,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"email": email, "password": "secreto123"})),
    );
    assert_eq!(resp.status(), 200);
    body_json(resp)["token"].as_str().unwrap().to_string()
}

/// Creates a listing through the API and returns its id.
pub fn seed_car(ctx: &AppContext, token: &str, doc: Value) -> String {
    let resp = send(ctx, Method::POST, "/api/cars", Some(token), Some(doc));
    assert_eq!(resp.status(), 201);
    body_json(resp)["id"].as_str().unwrap().to_string()
}

pub fn car_doc(brand: &str, model: &str, year: i32, price: f64) -> Value {
    json!({
        "marca": brand,
        "modelo": model,
        "año": year,
        "precio": price,
        "tipo": "Sedán",
        "kilometraje": 12000,
        "transmision": "Automática",
        "combustible": "Gasolina"
    })
}
