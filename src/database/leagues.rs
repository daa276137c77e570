use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::{Country, League};

pub fn insert_league(conn: &mut DbConn, name: &str, nationality_id: Option<i64>) -> Result<League> {
    let sql = "INSERT INTO Leagues (leaguename, league_nationality_id) VALUES (?1, ?2) RETURNING league_id, leaguename, league_nationality_id";

    conn.query_row(sql, params![name, nationality_id], parse_league_row)
        .context("Failed to insert league")
}

fn parse_league_row(row: &rusqlite::Row) -> rusqlite::Result<League> {
    Ok(League {
        league_id: row.get(0)?,
        leaguename: row.get(1)?,
        league_nationality_id: row.get(2)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<League>> {
    let sql = "SELECT league_id, leaguename, league_nationality_id FROM Leagues ORDER BY league_id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_league_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn insert_country(conn: &mut DbConn, name: &str) -> Result<Country> {
    let sql = "INSERT INTO Country (countryname) VALUES (?1) RETURNING country_id, countryname";

    conn.query_row(sql, params![name], parse_country_row)
        .context("Failed to insert country")
}

fn parse_country_row(row: &rusqlite::Row) -> rusqlite::Result<Country> {
    Ok(Country {
        country_id: row.get(0)?,
        countryname: row.get(1)?,
    })
}

pub fn list_countries(conn: &mut DbConn) -> Result<Vec<Country>> {
    let sql = "SELECT country_id, countryname FROM Country ORDER BY country_id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_country_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
