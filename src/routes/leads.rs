use astra::Request;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::auth::{optional_auth, require_auth};
use crate::db::cars::get_car;
use crate::db::favorites::{favorite_ids, toggle_favorite as toggle_favorite_row};
use crate::db::leads::{insert_lead, quotes_for_user, LeadKind, NewLead};
use crate::domain::comparison::comparison_table;
use crate::domain::financing::{
    estimate_financing, percent_from_input, term_from_input, DEFAULT_ANNUAL_RATE,
    DEFAULT_DOWN_PAYMENT_PERCENT, DEFAULT_TERM_MONTHS,
};
use crate::domain::{ComparisonSet, ContactRequest, Listing, QuoteRequest, TestDriveRequest};
use crate::errors::ServerError;
use crate::responses::{json_response, ResultResp};
use crate::router::{now_unix, parse_id, read_json, AppContext};
use crate::spreadsheets::export_comparison_xlsx;

fn load_listing(ctx: &AppContext, raw_id: &str) -> Result<(i64, Listing), ServerError> {
    let id = parse_id(raw_id.trim())?;
    let listing = ctx
        .db
        .with_conn(|conn| get_car(conn, id))?
        .ok_or(ServerError::NotFound)?;
    Ok((id, listing))
}

pub fn quote(req: &mut Request, ctx: &AppContext) -> ResultResp {
    let user = optional_auth(req, &ctx.tokens, now_unix())?;
    let body: QuoteRequest = read_json(req)?;
    body.check().map_err(ServerError::BadRequest)?;

    let (car_id, listing) = load_listing(ctx, &body.car_id)?;
    let pct = body
        .down_payment
        .as_deref()
        .map(percent_from_input)
        .unwrap_or(DEFAULT_DOWN_PAYMENT_PERCENT);
    let term = body
        .term
        .as_deref()
        .map(term_from_input)
        .unwrap_or(DEFAULT_TERM_MONTHS);
    let estimate = estimate_financing(listing.price, pct, term, DEFAULT_ANNUAL_RATE)
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;

    let lead = NewLead {
        kind: LeadKind::Quote,
        car_id: Some(car_id),
        user_id: user.as_ref().map(|c| c.sub),
        email: body.email.trim(),
        payload: json!({ "solicitud": body, "vehiculo": listing, "financiamiento": estimate }),
    };
    let id = ctx.db.with_conn(|conn| insert_lead(conn, &lead, now_unix()))?;

    info!(lead_id = id, car_id, "quote requested");
    json_response(
        201,
        &json!({ "message": "Quote sent", "id": id, "financiamiento": estimate }),
    )
}

pub fn contact(req: &mut Request, ctx: &AppContext) -> ResultResp {
    let user = optional_auth(req, &ctx.tokens, now_unix())?;
    let body: ContactRequest = read_json(req)?;
    body.check().map_err(ServerError::BadRequest)?;

    let lead = NewLead {
        kind: LeadKind::Contact,
        car_id: None,
        user_id: user.map(|c| c.sub),
        email: body.email.trim(),
        payload: json!(body),
    };
    let id = ctx.db.with_conn(|conn| insert_lead(conn, &lead, now_unix()))?;

    info!(lead_id = id, "contact message received");
    json_response(201, &json!({ "message": "Message sent", "id": id }))
}

pub fn test_drive(req: &mut Request, ctx: &AppContext) -> ResultResp {
    let user = optional_auth(req, &ctx.tokens, now_unix())?;
    let body: TestDriveRequest = read_json(req)?;
    body.check().map_err(ServerError::BadRequest)?;

    let car_id = if body.car_id.trim().is_empty() {
        None
    } else {
        Some(load_listing(ctx, &body.car_id)?.0)
    };

    let lead = NewLead {
        kind: LeadKind::TestDrive,
        car_id,
        user_id: user.map(|c| c.sub),
        email: body.email.trim(),
        payload: json!(body),
    };
    let id = ctx.db.with_conn(|conn| insert_lead(conn, &lead, now_unix()))?;

    info!(lead_id = id, ?car_id, "test drive requested");
    json_response(201, &json!({ "message": "Request sent", "id": id }))
}

pub fn my_quotes(req: &Request, ctx: &AppContext) -> ResultResp {
    let claims = require_auth(req, &ctx.tokens, now_unix())?;
    let quotes = ctx.db.with_conn(|conn| quotes_for_user(conn, claims.sub))?;
    json_response(200, &json!({ "cotizaciones": quotes }))
}

pub fn toggle_favorite(req: &Request, ctx: &AppContext, id: &str) -> ResultResp {
    let now = now_unix();
    let claims = require_auth(req, &ctx.tokens, now)?;
    let car_id = parse_id(id)?;

    let (favorite, ids) = ctx.db.with_conn(|conn| {
        let favorite = toggle_favorite_row(conn, claims.sub, car_id, now)?;
        Ok((favorite, favorite_ids(conn, claims.sub)?))
    })?;

    json_response(200, &json!({ "favorito": favorite, "favoritos": ids }))
}

#[derive(Deserialize)]
struct ExportBody {
    #[serde(alias = "vehiculoIds")]
    ids: Vec<Value>,
}

/// Ids arrive as strings or as bare numbers.
fn id_string(v: &Value) -> Result<String, ServerError> {
    match v {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(ServerError::BadRequest("ids must be strings or numbers".into())),
    }
}

pub fn export_comparison(req: &mut Request, ctx: &AppContext) -> ResultResp {
    let body: ExportBody = read_json(req)?;
    let ids = body
        .ids
        .iter()
        .map(id_string)
        .collect::<Result<Vec<_>, _>>()?;

    let mut listings = Vec::with_capacity(ids.len());
    for id in &ids {
        listings.push(load_listing(ctx, id)?.1);
    }

    // Canonical ids, so "01" and 1 collapse onto the same listing.
    let order: Vec<String> = listings.iter().map(|l| l.id.clone()).collect();
    let selection = ComparisonSet::rehydrate(&order, &listings);
    let table = comparison_table(selection.listings())
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;

    info!(count = selection.len(), "comparison exported");
    export_comparison_xlsx(&table)
}
