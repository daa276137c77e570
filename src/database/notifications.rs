use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::Notification;

pub fn insert_notification(conn: &mut DbConn, user_id: i64, message: &str) -> Result<Notification> {
    let sql = "INSERT INTO Notifications (user_id, message) VALUES (?1, ?2) RETURNING notification_id, message, created_at";

    conn.query_row(sql, params![user_id, message], parse_notification_row)
        .context("Failed to insert notification")
}

fn parse_notification_row(row: &rusqlite::Row) -> rusqlite::Result<Notification> {
    Ok(Notification {
        notification_id: row.get(0)?,
        message: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn list_recent(conn: &mut DbConn, user_id: i64, limit: usize) -> Result<Vec<Notification>> {
    let sql = "
        SELECT notification_id, message, created_at
        FROM Notifications
        WHERE user_id = ?1
        ORDER BY created_at DESC, notification_id DESC
        LIMIT ?2
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![user_id, limit as i64], parse_notification_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list notifications")?;

    Ok(rows)
}
