use crate::auth::TokenSigner;
use crate::config::Config;
use crate::db::Database;
use crate::errors::ServerError;
use crate::responses::{error_response, ResultResp};
use crate::routes;
use astra::{Request, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::io::Read;
use std::time::Instant;
use tracing::info;

const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Everything a handler needs besides the request itself.
#[derive(Clone)]
pub struct AppContext {
    pub db: Database,
    pub tokens: TokenSigner,
    pub require_auth_for_reads: bool,
}

impl AppContext {
    pub fn new(db: Database, tokens: TokenSigner, require_auth_for_reads: bool) -> Self {
        Self {
            db,
            tokens,
            require_auth_for_reads,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Database::new(config.db_path.clone()),
            TokenSigner::new(&config.jwt_secret, config.token_ttl_secs),
            config.require_auth_for_reads,
        )
    }
}

/// Entry point for the server loop: runs the handler, renders errors as JSON
/// for `/api` and as HTML for pages, and logs one line per request.
pub fn respond(req: Request, ctx: &AppContext) -> Response {
    let started = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let is_api = path.starts_with("/api/");

    let resp = match handle(req, ctx) {
        Ok(resp) => resp,
        Err(err) => error_response(err, is_api),
    };

    info!(
        method = %method,
        path = %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

pub fn handle(mut req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        // Pages
        ("GET", [""]) => routes::pages::catalog(&req, ctx),
        ("GET", ["autos", id]) => routes::pages::detail(&req, ctx, id),
        ("GET", ["comparar"]) => routes::pages::compare(&req, ctx),

        // Auth
        ("POST", ["api", "auth", "register" | "registro"]) => routes::auth::register(&mut req, ctx),
        ("POST", ["api", "auth", "login"]) => routes::auth::login(&mut req, ctx),

        // Listing CRUD
        ("GET", ["api", "cars"]) => routes::cars::list(&req, ctx),
        ("POST", ["api", "cars"]) => routes::cars::create(&mut req, ctx),
        ("GET", ["api", "cars", id]) => routes::cars::get(&req, ctx, id),
        ("PUT", ["api", "cars", id]) => routes::cars::update(&mut req, ctx, id),
        ("DELETE", ["api", "cars", id]) => routes::cars::delete(&req, ctx, id),

        // Catalog read contract
        ("GET", ["api", "vehiculos"]) => routes::cars::list(&req, ctx),
        ("GET", ["api", "vehiculos", "marcas"]) => routes::cars::brands(&req, ctx),
        ("GET", ["api", "vehiculos", "tipos"]) => routes::cars::body_types(&req, ctx),
        ("GET", ["api", "vehiculos", "años" | "a%C3%B1os" | "anios"]) => {
            routes::cars::years(&req, ctx)
        }
        ("GET", ["api", "vehiculos", id]) => routes::cars::get(&req, ctx, id),

        // Leads
        ("POST", ["api", "cotizaciones"]) => routes::leads::quote(&mut req, ctx),
        ("POST", ["api", "contacto"]) => routes::leads::contact(&mut req, ctx),
        ("POST", ["api", "pruebas-manejo"]) => routes::leads::test_drive(&mut req, ctx),
        ("GET", ["api", "usuarios", "cotizaciones"]) => routes::leads::my_quotes(&req, ctx),
        ("POST", ["api", "usuarios", "favoritos", id]) => {
            routes::leads::toggle_favorite(&req, ctx, id)
        }
        ("POST", ["api", "comparacion", "pdf"]) => routes::leads::export_comparison(&mut req, ctx),

        _ => Err(ServerError::NotFound),
    }
}

/// Decoded query parameters. A repeated key keeps its last value.
pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Reads and deserializes a JSON body, capped at 1 MiB.
pub fn read_json<T: DeserializeOwned>(req: &mut Request) -> Result<T, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("Request body too large".into()));
    }
    serde_json::from_slice(&buf).map_err(|e| ServerError::BadRequest(format!("Invalid JSON: {e}")))
}

pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Row ids in paths. Anything non-numeric cannot exist.
pub fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}
