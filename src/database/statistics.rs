use anyhow::{Context, Result};
use rusqlite::{params, params_from_iter};

use super::connection::DbConn;
use super::models::{PlayerMatchStatRow, ScorerStatRow, Statistic};
use crate::search::QueryFilter;

pub fn insert_statistic(conn: &mut DbConn, stat: &Statistic) -> Result<()> {
    let sql = "INSERT INTO Statistics (player_id, match_id, goal, pass_acc, assist, playtime) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    conn.execute(
        sql,
        params![
            stat.player_id,
            stat.match_id,
            stat.goal,
            stat.pass_acc,
            stat.assist,
            stat.playtime
        ],
    )
    .context("Failed to insert statistic")
    .map(|_| ())
}

/// Statistic rows of players that belong to a team in a league, narrowed by
/// `filter` over the `t`, `l` and `c` aliases.
pub fn list_scorer_rows(conn: &mut DbConn, filter: &QueryFilter) -> Result<Vec<ScorerStatRow>> {
    let sql = format!(
        "SELECT p.player_id, p.playername, t.teamname, l.leaguename, c.countryname AS nationality, s.goal
         FROM Statistics s
         INNER JOIN Players p ON s.player_id = p.player_id
         INNER JOIN Teams t ON p.team_id = t.team_id
         INNER JOIN Leagues l ON t.league_id = l.league_id
         LEFT JOIN Country c ON p.player_nationality_id = c.country_id
         {predicates}",
        predicates = filter.where_sql(),
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(filter.params()), |row| {
            Ok(ScorerStatRow {
                player_id: row.get(0)?,
                playername: row.get(1)?,
                teamname: row.get(2)?,
                leaguename: row.get(3)?,
                nationality: row.get(4)?,
                goal: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list scorer statistics")?;

    Ok(rows)
}

pub fn list_for_player(conn: &mut DbConn, player_id: i64) -> Result<Vec<PlayerMatchStatRow>> {
    let sql = "
        SELECT s.player_id, p.playername, m.match_id, m.date, m.match_location, m.league_id,
               home.teamname AS home_team, away.teamname AS away_team,
               m.hometeam_score, m.awayteam_score,
               s.goal, s.pass_acc, s.assist, s.playtime
        FROM Statistics s
        JOIN Matches m ON s.match_id = m.match_id
        JOIN Players p ON s.player_id = p.player_id
        LEFT JOIN Teams home ON m.hometeam_id = home.team_id
        LEFT JOIN Teams away ON m.awayteam_id = away.team_id
        WHERE s.player_id = ?1
        ORDER BY m.date ASC, m.match_id ASC
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![player_id], |row| {
            Ok(PlayerMatchStatRow {
                player_id: row.get(0)?,
                playername: row.get(1)?,
                match_id: row.get(2)?,
                date: row.get(3)?,
                match_location: row.get(4)?,
                league_id: row.get(5)?,
                home_team: row.get(6)?,
                away_team: row.get(7)?,
                hometeam_score: row.get(8)?,
                awayteam_score: row.get(9)?,
                goal: row.get(10)?,
                pass_acc: row.get(11)?,
                assist: row.get(12)?,
                playtime: row.get(13)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list statistics for player")?;

    Ok(rows)
}
