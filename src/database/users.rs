use anyhow::{Context, Result};
use rusqlite::{ffi, params, OptionalExtension};

use super::connection::DbConn;
use super::models::User;
use crate::auth::Credential;

const DEFAULT_ROLE_ID: i64 = 2;

pub fn insert_user(
    conn: &mut DbConn,
    username: &str,
    email: &str,
    credential: &Credential,
) -> Result<User> {
    let sql = "INSERT INTO Users (username, email, role_id, password_salt, password_hash) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING user_id, username, email, role_id, password_salt, password_hash";

    conn.query_row(
        sql,
        params![username, email, DEFAULT_ROLE_ID, credential.salt, credential.hash],
        parse_user_row,
    )
    .context("Failed to insert user")
}

fn parse_user_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        user_id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        role_id: row.get(3)?,
        password_salt: row.get(4)?,
        password_hash: row.get(5)?,
    })
}

pub fn find_by_username(conn: &mut DbConn, username: &str) -> Result<Option<User>> {
    let sql = "SELECT user_id, username, email, role_id, password_salt, password_hash FROM Users WHERE username = ?1";

    conn.query_row(sql, params![username], parse_user_row)
        .optional()
        .context("Failed to query user by username")
}

/// Whether `err` is the `UNIQUE` violation on `Users.username`, which a
/// concurrent signup for the same name can hit after the existence check.
pub fn is_duplicate_username(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<rusqlite::Error>(),
        Some(rusqlite::Error::SqliteFailure(e, _)) if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
