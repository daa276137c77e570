use chrono::NaiveDate;
use serde::Serialize;

use super::types::{MatchId, PlayerId};
use crate::database::models::PlayerMatchStatRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormRow {
    pub player_id: PlayerId,
    pub playername: String,
    pub date: NaiveDate,
    pub goal: u32,
    pub pass_acc: Option<f64>,
    pub assist: u32,
    pub playtime: u32,
    pub rolling_goal_avg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameLine {
    pub match_id: MatchId,
    pub date: NaiveDate,
    pub match_location: Option<String>,
    pub league_id: Option<i64>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub hometeam_score: u32,
    pub awayteam_score: u32,
    pub goal: u32,
    pub pass_acc: Option<f64>,
    pub assist: u32,
    pub playtime: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormReport {
    pub form_tracker: Vec<FormRow>,
    pub games: Vec<GameLine>,
}

/// Mean over each value and up to `window - 1` values before it.
pub fn trailing_average(values: &[u32], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let mut averages = Vec::with_capacity(values.len());
    let mut sum: u64 = 0;

    for (k, value) in values.iter().enumerate() {
        sum += *value as u64;
        if k >= window {
            sum -= values[k - window] as u64;
        }
        let count = (k + 1).min(window);
        averages.push(sum as f64 / count as f64);
    }

    averages
}

/// Builds both chronological views of a player's statistics. `None` when the
/// player has no statistic rows at all.
pub fn build_form(mut rows: Vec<PlayerMatchStatRow>, window: usize) -> Option<FormReport> {
    if rows.is_empty() {
        return None;
    }

    rows.sort_by_key(|row| (row.date, row.match_id));

    let goals: Vec<u32> = rows.iter().map(|row| row.goal).collect();
    let averages = trailing_average(&goals, window);

    let form_tracker = rows
        .iter()
        .zip(averages)
        .map(|(row, rolling_goal_avg)| FormRow {
            player_id: row.player_id,
            playername: row.playername.clone(),
            date: row.date,
            goal: row.goal,
            pass_acc: row.pass_acc,
            assist: row.assist,
            playtime: row.playtime,
            rolling_goal_avg,
        })
        .collect();

    let games = rows
        .into_iter()
        .map(|row| GameLine {
            match_id: row.match_id,
            date: row.date,
            match_location: row.match_location,
            league_id: row.league_id,
            home_team: row.home_team,
            away_team: row.away_team,
            hometeam_score: row.hometeam_score,
            awayteam_score: row.awayteam_score,
            goal: row.goal,
            pass_acc: row.pass_acc,
            assist: row.assist,
            playtime: row.playtime,
        })
        .collect();

    Some(FormReport { form_tracker, games })
}
