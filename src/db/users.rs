// src/db/users.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::User;
use crate::errors::ServerError;

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn email_exists(conn: &Connection, email: &str) -> Result<bool, ServerError> {
    let found = conn
        .query_row(
            "select 1 from users where email = ?",
            params![normalize_email(email)],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

pub fn create_user(
    conn: &Connection,
    email: &str,
    name: Option<&str>,
    phone: Option<&str>,
    password_hash: &str,
    now: i64,
) -> Result<User, ServerError> {
    let email = normalize_email(email);
    if email_exists(conn, &email)? {
        return Err(ServerError::Conflict("User already exists".into()));
    }

    conn.execute(
        r#"
        insert into users (email, name, phone, password_hash, created_at)
        values (?, ?, ?, ?, ?)
        "#,
        params![email, name, phone, password_hash, now],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(f, _)
            if f.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            ServerError::Conflict("User already exists".into())
        }
        other => ServerError::DbError(format!("create user failed: {other}")),
    })?;

    Ok(User {
        id: conn.last_insert_rowid(),
        email,
        name: name.map(str::to_string),
        phone: phone.map(str::to_string),
    })
}

/// The account and its stored password hash, for login.
pub fn find_with_hash(
    conn: &Connection,
    email: &str,
) -> Result<Option<(User, String)>, ServerError> {
    conn.query_row(
        "select id, email, name, phone, password_hash from users where email = ?",
        params![normalize_email(email)],
        |row| {
            Ok((
                User {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    name: row.get(2)?,
                    phone: row.get(3)?,
                },
                row.get::<_, String>(4)?,
            ))
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("user lookup failed: {e}")))
}

pub fn get_user(conn: &Connection, id: i64) -> Result<Option<User>, ServerError> {
    conn.query_row(
        "select id, email, name, phone from users where id = ?",
        params![id],
        |row| {
            Ok(User {
                id: row.get(0)?,
                email: row.get(1)?,
                name: row.get(2)?,
                phone: row.get(3)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("user lookup failed: {e}")))
}

pub fn touch_login(conn: &Connection, id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, id],
    )
    .map_err(|e| ServerError::DbError(format!("update last_login_at failed: {e}")))?;
    Ok(())
}
