use anyhow::{Context, Result};

use super::connection::DbConn;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Drops and recreates every table. Trigger bodies contain `;`, so the
/// schema goes to SQLite as one batch instead of being split per statement.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)
        .context("Failed to apply database schema")?;

    log::info!("Database schema reset successfully");
    Ok(())
}

pub fn is_reachable(conn: &mut DbConn) -> bool {
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
        .map(|one| one == 1)
        .unwrap_or(false)
}
