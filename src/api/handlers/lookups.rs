use axum::{
    extract::State,
    Json,
};
use std::sync::Arc;

use super::AppState;
use crate::api::extract::ApiPath;
use crate::database::{Country, League, Notification};
use crate::errors::StatsResult;

pub async fn nationalities(State(state): State<Arc<AppState>>) -> StatsResult<Json<Vec<Country>>> {
    state.stats.countries().map(Json)
}

pub async fn leagues(State(state): State<Arc<AppState>>) -> StatsResult<Json<Vec<League>>> {
    state.stats.leagues().map(Json)
}

pub async fn notifications(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<i64>,
) -> StatsResult<Json<Vec<Notification>>> {
    state.stats.notifications(user_id).map(Json)
}
