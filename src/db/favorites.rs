use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

/// Flips the favorite flag. Returns whether the listing is now a favorite.
pub fn toggle_favorite(
    conn: &Connection,
    user_id: i64,
    car_id: i64,
    now: i64,
) -> Result<bool, ServerError> {
    let car_exists = conn
        .query_row("select 1 from cars where id = ?", params![car_id], |_| Ok(()))
        .optional()?
        .is_some();
    if !car_exists {
        return Err(ServerError::NotFound);
    }

    let removed = conn.execute(
        "delete from favorites where user_id = ? and car_id = ?",
        params![user_id, car_id],
    )?;
    if removed > 0 {
        return Ok(false);
    }

    conn.execute(
        "insert into favorites (user_id, car_id, created_at) values (?, ?, ?)",
        params![user_id, car_id, now],
    )?;
    Ok(true)
}

pub fn favorite_ids(conn: &Connection, user_id: i64) -> Result<Vec<i64>, ServerError> {
    let mut stmt =
        conn.prepare("select car_id from favorites where user_id = ? order by created_at, car_id")?;
    let ids = stmt
        .query_map(params![user_id], |row| row.get(0))?
        .collect::<Result<Vec<i64>, _>>()?;
    Ok(ids)
}
