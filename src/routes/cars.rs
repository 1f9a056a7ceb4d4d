use astra::Request;
use serde_json::Value;
use tracing::info;

use crate::auth::require_auth;
use crate::db::cars::{delete_car, get_car, insert_car, list_cars, update_car};
use crate::domain::{Facets, Listing};
use crate::errors::ServerError;
use crate::responses::{json_message, json_response, ResultResp};
use crate::router::{now_unix, parse_id, read_json, AppContext};

/// Reads are public unless the deployment says otherwise.
fn gate_read(req: &Request, ctx: &AppContext) -> Result<(), ServerError> {
    if ctx.require_auth_for_reads {
        require_auth(req, &ctx.tokens, now_unix())?;
    }
    Ok(())
}

fn all_listings(ctx: &AppContext) -> Result<Vec<Listing>, ServerError> {
    ctx.db.with_conn(|conn| list_cars(conn))
}

pub fn list(req: &Request, ctx: &AppContext) -> ResultResp {
    gate_read(req, ctx)?;
    json_response(200, &all_listings(ctx)?)
}

pub fn get(req: &Request, ctx: &AppContext, id: &str) -> ResultResp {
    gate_read(req, ctx)?;
    let id = parse_id(id)?;
    let listing = ctx
        .db
        .with_conn(|conn| get_car(conn, id))?
        .ok_or(ServerError::NotFound)?;
    json_response(200, &listing)
}

pub fn create(req: &mut Request, ctx: &AppContext) -> ResultResp {
    let claims = require_auth(req, &ctx.tokens, now_unix())?;
    let doc: Value = read_json(req)?;

    let listing = ctx.db.with_conn(|conn| insert_car(conn, &doc, now_unix()))?;
    info!(car_id = %listing.id, user_id = claims.sub, "listing created");
    json_response(201, &listing)
}

pub fn update(req: &mut Request, ctx: &AppContext, id: &str) -> ResultResp {
    let claims = require_auth(req, &ctx.tokens, now_unix())?;
    let id = parse_id(id)?;
    let patch: Value = read_json(req)?;

    let listing = ctx
        .db
        .with_conn(|conn| update_car(conn, id, &patch, now_unix()))?
        .ok_or(ServerError::NotFound)?;
    info!(car_id = id, user_id = claims.sub, "listing updated");
    json_response(200, &listing)
}

pub fn delete(req: &Request, ctx: &AppContext, id: &str) -> ResultResp {
    let claims = require_auth(req, &ctx.tokens, now_unix())?;
    let id = parse_id(id)?;

    if !ctx.db.with_conn(|conn| delete_car(conn, id))? {
        return Err(ServerError::NotFound);
    }
    info!(car_id = id, user_id = claims.sub, "listing deleted");
    json_message(200, "Car deleted")
}

pub fn brands(req: &Request, ctx: &AppContext) -> ResultResp {
    gate_read(req, ctx)?;
    json_response(200, &Facets::from_listings(&all_listings(ctx)?).brands)
}

pub fn body_types(req: &Request, ctx: &AppContext) -> ResultResp {
    gate_read(req, ctx)?;
    json_response(200, &Facets::from_listings(&all_listings(ctx)?).body_types)
}

pub fn years(req: &Request, ctx: &AppContext) -> ResultResp {
    gate_read(req, ctx)?;
    json_response(200, &Facets::from_listings(&all_listings(ctx)?).years)
}
