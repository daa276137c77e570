use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::models::MessageResponse;
use crate::errors::{StatsError, StatsResult};
use crate::pagination::Page;
use crate::services::StatsService;

pub mod favorites;
pub mod games;
pub mod lookups;
pub mod players;
pub mod teams;
pub mod users;

pub struct AppState {
    pub stats: StatsService,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl PageParams {
    pub fn to_page(&self, state: &AppState) -> Page {
        page_of(state, self.page, self.page_size)
    }
}

pub fn page_of(state: &AppState, page: Option<usize>, page_size: Option<usize>) -> Page {
    Page::new(page, page_size, state.stats.query_settings())
}

/// Parses an optional id parameter where absent, empty and `"all"` all mean
/// "no restriction".
pub fn parse_scope_id(raw: Option<&str>, name: &str) -> StatsResult<Option<i64>> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| StatsError::invalid(format!("Invalid {name} id: {value}"))),
    }
}

pub async fn home(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    let message = if state.stats.is_connected() {
        "Welcome to the sports statistics API. Connected to database."
    } else {
        "Welcome to the sports statistics API."
    };
    Json(MessageResponse::new(message))
}
