use axum::{
    extract::State,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{page_of, parse_scope_id, AppState, PageParams};
use crate::api::extract::ApiQuery;
use crate::database::{PlayerListing, PlayerSearchRow};
use crate::engine::{FormReport, ScorerFilter, ScorerRow};
use crate::errors::StatsResult;
use crate::search::PlayerSearch;

#[derive(Debug, Deserialize)]
pub struct PlayerSearchParams {
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub nationality: Option<i64>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct FormTrackerParams {
    pub player_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct TopScorerParams {
    pub league: Option<String>,
    pub team: Option<String>,
    pub nationality: Option<String>,
    pub limit: Option<usize>,
}

/// Empty matches are a successful empty list.
pub async fn search_players(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PlayerSearchParams>,
) -> StatsResult<Json<Vec<PlayerSearchRow>>> {
    let search = PlayerSearch {
        name: params.name,
        team_id: parse_scope_id(params.team.as_deref(), "team")?,
        position: params.position,
        nationality_id: params.nationality,
    };
    let page = page_of(&state, params.page, params.page_size);

    state.stats.search_players(&search, &page).map(Json)
}

pub async fn list_players(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> StatsResult<Json<Vec<PlayerListing>>> {
    let page = params.to_page(&state);
    state.stats.list_players(&page).map(Json)
}

pub async fn form_tracker(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<FormTrackerParams>,
) -> StatsResult<Json<FormReport>> {
    state.stats.form_tracker(params.player_id).map(Json)
}

pub async fn top_scorers(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<TopScorerParams>,
) -> StatsResult<Json<Vec<ScorerRow>>> {
    let filter = ScorerFilter::from_params(params.league, params.team, params.nationality)?;
    state.stats.top_scorers(&filter, params.limit).map(Json)
}
