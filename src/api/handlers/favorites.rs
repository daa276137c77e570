use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::AppState;
use crate::api::extract::ApiQuery;
use crate::api::models::MessageResponse;
use crate::database::favorites::{FavoriteTarget, Toggle};
use crate::database::{FavoritePlayerRow, FavoriteTeamRow};
use crate::errors::StatsResult;

#[derive(Debug, Deserialize)]
pub struct FavoritePlayerParams {
    pub userid: i64,
    pub playerid: i64,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteTeamParams {
    pub userid: i64,
    pub teamid: i64,
}

#[derive(Debug, Deserialize)]
pub struct UserParams {
    pub userid: i64,
}

fn toggle_message(target: FavoriteTarget, toggle: Toggle) -> String {
    let action = match toggle {
        Toggle::Added => "added",
        Toggle::Removed => "removed",
    };
    format!("Favorite {} {action} successfully", target.label())
}

async fn toggle(
    state: &AppState,
    target: FavoriteTarget,
    user_id: i64,
    target_id: i64,
) -> StatsResult<(StatusCode, Json<MessageResponse>)> {
    let toggle = state.stats.toggle_favorite(target, user_id, target_id)?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(toggle_message(target, toggle))),
    ))
}

pub async fn toggle_player(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<FavoritePlayerParams>,
) -> StatsResult<(StatusCode, Json<MessageResponse>)> {
    toggle(&state, FavoriteTarget::Player, params.userid, params.playerid).await
}

pub async fn toggle_team(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<FavoriteTeamParams>,
) -> StatsResult<(StatusCode, Json<MessageResponse>)> {
    toggle(&state, FavoriteTarget::Team, params.userid, params.teamid).await
}

pub async fn view_players(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<UserParams>,
) -> StatsResult<Json<Vec<FavoritePlayerRow>>> {
    state.stats.favorite_players(params.userid).map(Json)
}

pub async fn view_teams(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<UserParams>,
) -> StatsResult<Json<Vec<FavoriteTeamRow>>> {
    state.stats.favorite_teams(params.userid).map(Json)
}
