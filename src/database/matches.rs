use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::params_from_iter;
use rusqlite::types::Value;

use super::connection::DbConn;
use super::models::{Match, MatchListing};
use crate::pagination::Page;
use crate::search::QueryFilter;

const MATCH_COLUMNS: &str = "match_id, date, match_location, league_id, hometeam_id, awayteam_id, hometeam_score, awayteam_score";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOrder {
    Chronological,
    MostRecent,
}

impl MatchOrder {
    fn sql(self) -> &'static str {
        match self {
            MatchOrder::Chronological => "m.date ASC, m.match_id ASC",
            MatchOrder::MostRecent => "m.date DESC, m.match_id DESC",
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn insert_match(
    conn: &mut DbConn,
    date: NaiveDate,
    location: Option<&str>,
    league_id: Option<i64>,
    hometeam_id: i64,
    awayteam_id: i64,
    hometeam_score: u32,
    awayteam_score: u32,
) -> Result<Match> {
    let sql = format!(
        "INSERT INTO Matches (date, match_location, league_id, hometeam_id, awayteam_id, hometeam_score, awayteam_score) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING {MATCH_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            date,
            location,
            league_id,
            hometeam_id,
            awayteam_id,
            hometeam_score,
            awayteam_score
        ],
        parse_match_row,
    )
    .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        match_id: row.get(0)?,
        date: row.get(1)?,
        match_location: row.get(2)?,
        league_id: row.get(3)?,
        hometeam_id: row.get(4)?,
        awayteam_id: row.get(5)?,
        hometeam_score: row.get(6)?,
        awayteam_score: row.get(7)?,
    })
}

/// Matches whose own `league_id` equals `league_id`; the teams' league is not consulted.
pub fn list_by_league(conn: &mut DbConn, league_id: i64) -> Result<Vec<Match>> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM Matches WHERE league_id = ?1 ORDER BY match_id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![league_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list matches by league")?;

    Ok(rows)
}

pub fn list_by_team(conn: &mut DbConn, team_id: i64) -> Result<Vec<Match>> {
    let sql = format!(
        "SELECT {MATCH_COLUMNS} FROM Matches WHERE hometeam_id = ?1 OR awayteam_id = ?1 ORDER BY match_id"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![team_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list matches by team")?;

    Ok(rows)
}

pub fn list_listings(
    conn: &mut DbConn,
    filter: &QueryFilter,
    order: MatchOrder,
    page: &Page,
) -> Result<Vec<MatchListing>> {
    let sql = format!(
        "SELECT m.match_id, m.date, m.match_location, m.league_id, l.leaguename,
                m.hometeam_id, m.awayteam_id, home.teamname AS home_team, away.teamname AS away_team,
                m.hometeam_score, m.awayteam_score
         FROM Matches m
         LEFT JOIN Leagues l ON m.league_id = l.league_id
         LEFT JOIN Teams home ON m.hometeam_id = home.team_id
         LEFT JOIN Teams away ON m.awayteam_id = away.team_id
         {joins}
         {predicates}
         {order}
         LIMIT ? OFFSET ?",
        joins = filter.join_sql(),
        predicates = filter.where_sql(),
        order = filter.order_sql(order.sql()),
    );

    let mut values = filter.params();
    values.extend(page.sql_params().map(Value::Integer));

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(values), |row| {
            Ok(MatchListing {
                match_id: row.get(0)?,
                date: row.get(1)?,
                match_location: row.get(2)?,
                league_id: row.get(3)?,
                leaguename: row.get(4)?,
                hometeam_id: row.get(5)?,
                awayteam_id: row.get(6)?,
                home_team: row.get(7)?,
                away_team: row.get(8)?,
                hometeam_score: row.get(9)?,
                awayteam_score: row.get(10)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list matches")?;

    Ok(rows)
}
