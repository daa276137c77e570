use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Country {
    pub country_id: i64,
    pub countryname: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct League {
    pub league_id: i64,
    pub leaguename: String,
    pub league_nationality_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub team_id: i64,
    pub teamname: String,
    pub league_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub player_id: i64,
    pub playername: String,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub team_id: Option<i64>,
    pub player_nationality_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct Match {
    pub match_id: i64,
    pub date: NaiveDate,
    pub match_location: Option<String>,
    pub league_id: Option<i64>,
    pub hometeam_id: i64,
    pub awayteam_id: i64,
    pub hometeam_score: u32,
    pub awayteam_score: u32,
}

#[derive(Debug, Clone)]
pub struct Statistic {
    pub player_id: i64,
    pub match_id: i64,
    pub goal: u32,
    pub pass_acc: Option<f64>,
    pub assist: u32,
    pub playtime: u32,
}

#[derive(Debug, Clone)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role_id: i64,
    pub password_salt: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub notification_id: i64,
    pub message: String,
    pub created_at: NaiveDateTime,
}

// DTOs for joined queries
#[derive(Debug, Clone)]
pub struct TeamWithLeague {
    pub team_id: i64,
    pub teamname: String,
    pub league_id: Option<i64>,
    pub leaguename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchListing {
    pub match_id: i64,
    pub date: NaiveDate,
    pub match_location: Option<String>,
    pub league_id: Option<i64>,
    pub leaguename: Option<String>,
    pub hometeam_id: i64,
    pub awayteam_id: i64,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub hometeam_score: u32,
    pub awayteam_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSearchRow {
    pub player_id: i64,
    pub playername: String,
    pub teamname: Option<String>,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerListing {
    pub player_id: i64,
    pub playername: String,
    pub position: Option<String>,
    pub player_nationality_id: Option<i64>,
    pub age: Option<i32>,
    pub teamname: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoritePlayerRow {
    pub user_id: i64,
    pub player_id: i64,
    pub playername: Option<String>,
    pub teamname: Option<String>,
    pub position: Option<String>,
    #[serde(rename = "dateAdded")]
    pub date_added: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteTeamRow {
    pub user_id: i64,
    pub team_id: i64,
    pub teamname: Option<String>,
    pub leaguename: Option<String>,
    pub countryname: Option<String>,
    #[serde(rename = "dateAdded")]
    pub date_added: NaiveDateTime,
}

/// One statistic row with the display columns the scorer ranking needs.
#[derive(Debug, Clone)]
pub struct ScorerStatRow {
    pub player_id: i64,
    pub playername: String,
    pub teamname: String,
    pub leaguename: String,
    pub nationality: Option<String>,
    pub goal: u32,
}

/// One statistic row of a single player joined to its match.
#[derive(Debug, Clone)]
pub struct PlayerMatchStatRow {
    pub player_id: i64,
    pub playername: String,
    pub match_id: i64,
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
