use anyhow::{Context, Result};
use rusqlite::{params, params_from_iter, OptionalExtension};

use super::connection::DbConn;
use super::models::{Player, PlayerListing, PlayerSearchRow};
use crate::pagination::Page;
use crate::search::QueryFilter;

const PLAYER_COLUMNS: &str =
    "player_id, playername, position, age, team_id, player_nationality_id";

pub fn insert_player(
    conn: &mut DbConn,
    name: &str,
    position: Option<&str>,
    age: Option<i32>,
    team_id: Option<i64>,
    nationality_id: Option<i64>,
) -> Result<Player> {
    let sql = format!(
        "INSERT INTO Players (playername, position, age, team_id, player_nationality_id) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {PLAYER_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![name, position, age, team_id, nationality_id],
        parse_player_row,
    )
    .context("Failed to insert player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        player_id: row.get(0)?,
        playername: row.get(1)?,
        position: row.get(2)?,
        age: row.get(3)?,
        team_id: row.get(4)?,
        player_nationality_id: row.get(5)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM Players WHERE player_id = ?1");

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

/// Players of one team, or every player when `team_id` is `None`.
pub fn list_by_team(conn: &mut DbConn, team_id: Option<i64>) -> Result<Vec<Player>> {
    let filter = QueryFilter::new().maybe(team_id, |f, id| f.equals("team_id", id));
    let sql = format!(
        "SELECT {PLAYER_COLUMNS} FROM Players {} ORDER BY player_id",
        filter.where_sql()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(filter.params()), parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players by team")?;

    Ok(rows)
}

pub fn list_page(conn: &mut DbConn, page: &Page) -> Result<Vec<PlayerListing>> {
    let sql = "
        SELECT p.player_id, p.playername, p.position, p.player_nationality_id, p.age,
               t.teamname, c.countryname AS nationality
        FROM Players p
        LEFT JOIN Teams t ON p.team_id = t.team_id
        LEFT JOIN Country c ON p.player_nationality_id = c.country_id
        ORDER BY p.player_id
        LIMIT ?1 OFFSET ?2
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params_from_iter(page.sql_params()), |row| {
            Ok(PlayerListing {
                player_id: row.get(0)?,
                playername: row.get(1)?,
                position: row.get(2)?,
                player_nationality_id: row.get(3)?,
                age: row.get(4)?,
                teamname: row.get(5)?,
                nationality: row.get(6)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players")?;

    Ok(rows)
}

pub fn search(conn: &mut DbConn, filter: &QueryFilter, page: &Page) -> Result<Vec<PlayerSearchRow>> {
    let sql = format!(
        "SELECT p.player_id, p.playername, t.teamname, p.position, c.countryname AS nationality, p.age
         FROM Players p
         LEFT JOIN Teams t ON p.team_id = t.team_id
         LEFT JOIN Country c ON p.player_nationality_id = c.country_id
         {joins}
         {predicates}
         {order}
         LIMIT ? OFFSET ?",
        joins = filter.join_sql(),
        predicates = filter.where_sql(),
        order = filter.order_sql("p.playername, p.player_id"),
    );

    let mut values = filter.params();
    values.extend(page.sql_params().map(rusqlite::types::Value::Integer));

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(values), |row| {
            Ok(PlayerSearchRow {
                player_id: row.get(0)?,
                playername: row.get(1)?,
                teamname: row.get(2)?,
                position: row.get(3)?,
                nationality: row.get(4)?,
                age: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to search players")?;

    Ok(rows)
}
