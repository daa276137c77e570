use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, TransactionBehavior};
use serde::Serialize;

use super::connection::DbConn;
use super::models::{FavoritePlayerRow, FavoriteTeamRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Player,
    Team,
}

impl FavoriteTarget {
    fn table(self) -> &'static str {
        match self {
            FavoriteTarget::Player => "FavoritePlayers",
            FavoriteTarget::Team => "FavoriteTeams",
        }
    }

    fn column(self) -> &'static str {
        match self {
            FavoriteTarget::Player => "player_id",
            FavoriteTarget::Team => "team_id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FavoriteTarget::Player => "Player",
            FavoriteTarget::Team => "Team",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Added,
    Removed,
}

/// Flips the presence of the (user, target) pair.
///
/// The IMMEDIATE transaction takes SQLite's write lock before the delete, so
/// two concurrent toggles on the same pair serialize. The composite primary
/// key rejects a duplicate pair regardless.
pub fn toggle(
    conn: &mut DbConn,
    target: FavoriteTarget,
    user_id: i64,
    target_id: i64,
) -> Result<Toggle> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .context("Failed to begin favorite toggle")?;

    let delete_sql = format!(
        "DELETE FROM {} WHERE user_id = ?1 AND {} = ?2",
        target.table(),
        target.column()
    );
    let deleted = tx
        .execute(&delete_sql, params![user_id, target_id])
        .context("Failed to delete favorite")?;

    let outcome = if deleted > 0 {
        Toggle::Removed
    } else {
        let insert_sql = format!(
            "INSERT INTO {} (user_id, {}, dateAdded) VALUES (?1, ?2, ?3)",
            target.table(),
            target.column()
        );
        tx.execute(&insert_sql, params![user_id, target_id, Utc::now().naive_utc()])
            .context("Failed to insert favorite")?;
        Toggle::Added
    };

    tx.commit().context("Failed to commit favorite toggle")?;
    Ok(outcome)
}

pub fn exists(conn: &mut DbConn, target: FavoriteTarget, user_id: i64, target_id: i64) -> Result<bool> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE user_id = ?1 AND {} = ?2)",
        target.table(),
        target.column()
    );

    conn.query_row(&sql, params![user_id, target_id], |row| row.get(0))
        .context("Failed to check favorite")
}

pub fn list_players(conn: &mut DbConn, user_id: i64) -> Result<Vec<FavoritePlayerRow>> {
    let sql = "
        SELECT f.user_id, f.player_id, p.playername, t.teamname, p.position, f.dateAdded
        FROM FavoritePlayers f
        LEFT JOIN Players p ON f.player_id = p.player_id
        LEFT JOIN Teams t ON p.team_id = t.team_id
        WHERE f.user_id = ?1
        ORDER BY f.dateAdded DESC, f.rowid DESC
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![user_id], |row| {
            Ok(FavoritePlayerRow {
                user_id: row.get(0)?,
                player_id: row.get(1)?,
                playername: row.get(2)?,
                teamname: row.get(3)?,
                position: row.get(4)?,
                date_added: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list favorite players")?;

    Ok(rows)
}

pub fn list_teams(conn: &mut DbConn, user_id: i64) -> Result<Vec<FavoriteTeamRow>> {
    let sql = "
        SELECT f.user_id, f.team_id, t.teamname, l.leaguename, c.countryname, f.dateAdded
        FROM FavoriteTeams f
        LEFT JOIN Teams t ON f.team_id = t.team_id
        LEFT JOIN Leagues l ON t.league_id = l.league_id
        LEFT JOIN Country c ON l.league_nationality_id = c.country_id
        WHERE f.user_id = ?1
        ORDER BY f.dateAdded DESC, f.rowid DESC
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![user_id], |row| {
            Ok(FavoriteTeamRow {
                user_id: row.get(0)?,
                team_id: row.get(1)?,
                teamname: row.get(2)?,
                leaguename: row.get(3)?,
                countryname: row.get(4)?,
                date_added: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list favorite teams")?;

    Ok(rows)
}
