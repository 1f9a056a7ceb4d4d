use astra::Request;
use serde_json::json;
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::db::users::{create_user, find_with_hash, touch_login};
use crate::domain::{AuthResponse, LoginRequest, RegisterRequest};
use crate::errors::ServerError;
use crate::responses::{json_response, ResultResp};
use crate::router::{now_unix, read_json, AppContext};

pub fn register(req: &mut Request, ctx: &AppContext) -> ResultResp {
    let body: RegisterRequest = read_json(req)?;
    body.check().map_err(ServerError::BadRequest)?;

    let hash = hash_password(&body.password)?;
    let name = body.name.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let phone = body.phone.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let user = ctx
        .db
        .with_conn(|conn| create_user(conn, &body.email, name, phone, &hash, now_unix()))?;

    info!(user_id = user.id, "user registered");
    json_response(
        201,
        &json!({ "message": "User registered", "usuario": user }),
    )
}

pub fn login(req: &mut Request, ctx: &AppContext) -> ResultResp {
    let body: LoginRequest = read_json(req)?;
    let now = now_unix();

    let (user, hash) = ctx
        .db
        .with_conn(|conn| find_with_hash(conn, &body.email))?
        .ok_or_else(|| ServerError::BadRequest("User not found".into()))?;

    if !verify_password(&body.password, &hash) {
        info!(user_id = user.id, "login rejected");
        return Err(ServerError::BadRequest("Incorrect password".into()));
    }

    ctx.db.with_conn(|conn| touch_login(conn, user.id, now))?;
    let token = ctx.tokens.issue(user.id, now)?;

    info!(user_id = user.id, "user logged in");
    json_response(200, &AuthResponse { token, user })
}
