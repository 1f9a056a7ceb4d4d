// src/db/leads.rs
//
// Quotes, contact messages and test-drive requests share one table. The
// request body (plus a listing snapshot for quotes) is kept as JSON.
use chrono::DateTime;
use rusqlite::{params, Connection};
use serde_json::Value;

use crate::domain::leads::STATUS_PENDING;
use crate::domain::{Listing, QuoteRecord};
use crate::errors::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadKind {
    Quote,
    Contact,
    TestDrive,
}

impl LeadKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadKind::Quote => "quote",
            LeadKind::Contact => "contact",
            LeadKind::TestDrive => "test_drive",
        }
    }
}

pub struct NewLead<'a> {
    pub kind: LeadKind,
    pub car_id: Option<i64>,
    pub user_id: Option<i64>,
    pub email: &'a str,
    pub payload: Value,
}

pub fn insert_lead(conn: &Connection, lead: &NewLead<'_>, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into leads (kind, car_id, user_id, email, payload, status, created_at)
        values (?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            lead.kind.as_str(),
            lead.car_id,
            lead.user_id,
            lead.email,
            lead.payload.to_string(),
            STATUS_PENDING,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert lead failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

/// The user's quotes, newest first, each with the listing as it was quoted.
pub fn quotes_for_user(conn: &Connection, user_id: i64) -> Result<Vec<QuoteRecord>, ServerError> {
    let mut stmt = conn.prepare(
        r#"
        select id, payload, status, created_at
        from leads
        where user_id = ? and kind = ?
        order by created_at desc, id desc
        "#,
    )?;
    let rows = stmt.query_map(params![user_id, LeadKind::Quote.as_str()], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, i64>(3)?,
        ))
    })?;

    let mut out = Vec::new();
    for row in rows {
        let (id, payload, status, created_at) = row?;
        let listing = serde_json::from_str::<Value>(&payload)
            .ok()
            .and_then(|mut v| v.get_mut("vehiculo").map(Value::take))
            .and_then(|v| serde_json::from_value::<Listing>(v).ok());

        out.push(QuoteRecord {
            id,
            listing,
            created_at: DateTime::from_timestamp(created_at, 0).unwrap_or_default(),
            status,
        });
    }
    Ok(out)
}
