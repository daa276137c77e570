use axum::{
    extract::State,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{page_of, parse_scope_id, AppState};
use crate::api::extract::ApiQuery;
use crate::database::MatchListing;
use crate::errors::{StatsError, StatsResult};
use crate::search::games::{parse_date, GameSearch};

#[derive(Debug, Deserialize)]
pub struct RecentGamesParams {
    pub league: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct GameSearchParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub league: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

pub async fn recent_games(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<RecentGamesParams>,
) -> StatsResult<Json<Vec<MatchListing>>> {
    let league_id = parse_scope_id(params.league.as_deref(), "league")?;
    let page = page_of(&state, params.page, params.page_size);
    state.stats.recent_games(league_id, &page).map(Json)
}

pub async fn search_games(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<GameSearchParams>,
) -> StatsResult<Json<Vec<MatchListing>>> {
    let date = |raw: Option<&str>, name: &str| {
        parse_date(raw).map_err(|_| StatsError::invalid(format!("{name} must be yyyy-mm-dd")))
    };

    let search = GameSearch {
        start_date: date(params.start_date.as_deref(), "start_date")?,
        end_date: date(params.end_date.as_deref(), "end_date")?,
        league_id: parse_scope_id(params.league.as_deref(), "league")?,
    };
    let page = page_of(&state, params.page, params.page_size);

    state.stats.search_games(&search, &page).map(Json)
}
