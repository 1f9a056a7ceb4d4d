// src/db/cars.rs
//
// Listings live as JSON documents in `cars.doc`. The row id and timestamps
// are columns and always win over whatever the document says.
use chrono::DateTime;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{Map, Value};

use crate::domain::Listing;
use crate::errors::ServerError;

/// Input names folded onto the stored (client contract) names before merging.
const FIELD_ALIASES: &[(&str, &str)] = &[
    ("Marca", "marca"),
    ("Modelo", "modelo"),
    ("Año", "año"),
    ("anio", "año"),
    ("Tipo", "tipo"),
    ("Precio", "precio"),
    ("Kilometraje", "kilometraje"),
    ("Transmisión", "transmision"),
    ("transmisión", "transmision"),
    ("Combustible", "combustible"),
];

/// Keys owned by the row, never by the document.
const ROW_KEYS: &[&str] = &["id", "_id", "fechaCreacion"];

fn canonical_object(doc: &Value) -> Result<Map<String, Value>, ServerError> {
    let obj = doc
        .as_object()
        .ok_or_else(|| ServerError::BadRequest("Listing must be a JSON object".into()))?;

    let mut out = Map::new();
    for (k, v) in obj {
        if ROW_KEYS.contains(&k.as_str()) {
            continue;
        }
        let key = FIELD_ALIASES
            .iter()
            .find(|(alias, _)| alias == k)
            .map(|(_, canonical)| *canonical)
            .unwrap_or(k.as_str());
        out.insert(key.to_string(), v.clone());
    }
    Ok(out)
}

fn to_listing(doc: Map<String, Value>) -> Result<Listing, ServerError> {
    let listing: Listing = serde_json::from_value(Value::Object(doc))
        .map_err(|e| ServerError::BadRequest(format!("Invalid listing: {e}")))?;
    listing.check().map_err(ServerError::BadRequest)?;
    Ok(listing)
}

/// Serialized form kept on disk, without row-owned fields.
fn stored_doc(listing: &Listing) -> Result<String, ServerError> {
    let mut l = listing.clone();
    l.id = String::new();
    l.created_at = None;
    let mut value = serde_json::to_value(&l).map_err(|_| ServerError::InternalError)?;
    if let Some(obj) = value.as_object_mut() {
        obj.remove("id");
    }
    Ok(value.to_string())
}

fn from_row(id: i64, doc: &str, created_at: i64) -> Result<Listing, ServerError> {
    let mut listing: Listing = serde_json::from_str(doc)
        .map_err(|e| ServerError::DbError(format!("corrupt listing {id}: {e}")))?;
    listing.id = id.to_string();
    listing.created_at = DateTime::from_timestamp(created_at, 0);
    Ok(listing)
}

/// Every listing, oldest first.
pub fn list_cars(conn: &Connection) -> Result<Vec<Listing>, ServerError> {
    let mut stmt = conn.prepare("select id, doc, created_at from cars order by id")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, i64>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for row in rows {
        let (id, doc, created_at) = row?;
        out.push(from_row(id, &doc, created_at)?);
    }
    Ok(out)
}

pub fn get_car(conn: &Connection, id: i64) -> Result<Option<Listing>, ServerError> {
    let row = conn
        .query_row(
            "select doc, created_at from cars where id = ?",
            params![id],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)),
        )
        .optional()?;

    row.map(|(doc, created_at)| from_row(id, &doc, created_at))
        .transpose()
}

pub fn insert_car(conn: &Connection, doc: &Value, now: i64) -> Result<Listing, ServerError> {
    let listing = to_listing(canonical_object(doc)?)?;

    conn.execute(
        "insert into cars (doc, created_at, updated_at) values (?, ?, ?)",
        params![stored_doc(&listing)?, now, now],
    )?;
    let id = conn.last_insert_rowid();

    get_car(conn, id)?.ok_or(ServerError::InternalError)
}

/// Shallow merge: keys in `patch` replace stored ones, `null` removes a key.
/// Returns `None` when the listing does not exist.
pub fn update_car(
    conn: &Connection,
    id: i64,
    patch: &Value,
    now: i64,
) -> Result<Option<Listing>, ServerError> {
    let Some(stored) = conn
        .query_row("select doc from cars where id = ?", params![id], |row| {
            row.get::<_, String>(0)
        })
        .optional()?
    else {
        return Ok(None);
    };

    let stored: Value = serde_json::from_str(&stored)
        .map_err(|e| ServerError::DbError(format!("corrupt listing {id}: {e}")))?;
    let mut merged = canonical_object(&stored)?;
    for (k, v) in canonical_object(patch)? {
        if v.is_null() {
            merged.remove(&k);
        } else {
            merged.insert(k, v);
        }
    }

    let listing = to_listing(merged)?;
    conn.execute(
        "update cars set doc = ?, updated_at = ? where id = ?",
        params![stored_doc(&listing)?, now, id],
    )?;

    get_car(conn, id)
}

pub fn delete_car(conn: &Connection, id: i64) -> Result<bool, ServerError> {
    let n = conn.execute("delete from cars where id = ?", params![id])?;
    Ok(n > 0)
}
