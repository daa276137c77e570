use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::{Team, TeamWithLeague};

pub fn insert_team(conn: &mut DbConn, name: &str, league_id: Option<i64>) -> Result<Team> {
    let sql = "INSERT INTO Teams (teamname, league_id) VALUES (?1, ?2) RETURNING team_id, teamname, league_id";

    conn.query_row(sql, params![name, league_id], |row| {
        Ok(Team {
            team_id: row.get(0)?,
            teamname: row.get(1)?,
            league_id: row.get(2)?,
        })
    })
    .context("Failed to insert team")
}

fn parse_team_with_league_row(row: &rusqlite::Row) -> rusqlite::Result<TeamWithLeague> {
    Ok(TeamWithLeague {
        team_id: row.get(0)?,
        teamname: row.get(1)?,
        league_id: row.get(2)?,
        leaguename: row.get(3)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, team_id: i64) -> Result<Option<TeamWithLeague>> {
    let sql = "
        SELECT t.team_id, t.teamname, t.league_id, l.leaguename
        FROM Teams t
        LEFT JOIN Leagues l ON t.league_id = l.league_id
        WHERE t.team_id = ?1
    ";

    conn.query_row(sql, params![team_id], parse_team_with_league_row)
        .optional()
        .context("Failed to query team by id")
}

/// Teams registered to `league_id`, in team id order.
pub fn list_by_league(conn: &mut DbConn, league_id: i64) -> Result<Vec<TeamWithLeague>> {
    let sql = "
        SELECT t.team_id, t.teamname, t.league_id, l.leaguename
        FROM Teams t
        LEFT JOIN Leagues l ON t.league_id = l.league_id
        WHERE t.league_id = ?1
        ORDER BY t.team_id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![league_id], parse_team_with_league_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list teams by league")?;

    Ok(rows)
}
