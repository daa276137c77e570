use axum::{
    extract::State,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{parse_scope_id, AppState};
use crate::api::extract::ApiQuery;
use crate::database::Player;
use crate::engine::{LeaderboardRow, StandingsRow};
use crate::errors::StatsResult;
use crate::services::{TeamDetails, TeamStats};

#[derive(Debug, Deserialize)]
pub struct TeamParams {
    pub team: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LeagueParams {
    pub league: i64,
}

pub async fn team_players(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<TeamParams>,
) -> StatsResult<Json<Vec<Player>>> {
    let team_id = parse_scope_id(params.team.as_deref(), "team")?;
    state.stats.team_players(team_id).map(Json)
}

/// Zero or one row; an unknown or absent team is an empty list.
pub async fn team_stats(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<TeamParams>,
) -> StatsResult<Json<Vec<TeamStats>>> {
    let stats = match parse_scope_id(params.team.as_deref(), "team")? {
        Some(team_id) => state.stats.team_stats(team_id)?.into_iter().collect(),
        None => Vec::new(),
    };
    Ok(Json(stats))
}

pub async fn team_details(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<TeamParams>,
) -> StatsResult<Json<TeamDetails>> {
    let team_id = parse_scope_id(params.team.as_deref(), "team")?;
    state.stats.team_details(team_id).map(Json)
}

pub async fn league_leaderboard(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<LeagueParams>,
) -> StatsResult<Json<Vec<LeaderboardRow>>> {
    state.stats.league_leaderboard(params.league).map(Json)
}

pub async fn league_standings(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<LeagueParams>,
) -> StatsResult<Json<Vec<StandingsRow>>> {
    state.stats.league_standings(params.league).map(Json)
}
