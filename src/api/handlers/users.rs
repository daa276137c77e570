use axum::{extract::State, http::StatusCode, Json};
use log::info;
use serde::Deserialize;
use std::sync::Arc;

use super::AppState;
use crate::api::extract::ApiForm;
use crate::api::models::{LoginResponse, MessageResponse};
use crate::errors::StatsResult;

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    ApiForm(form): ApiForm<SignupForm>,
) -> StatsResult<(StatusCode, Json<MessageResponse>)> {
    let user_id = state.stats.register(&form.username, &form.password, &form.email)?;
    info!("Registered user {user_id}");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully. Please log in.")),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiForm(form): ApiForm<LoginForm>,
) -> StatsResult<Json<LoginResponse>> {
    let id = state.stats.login(&form.username, &form.password)?;
    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        id,
    }))
}

pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new("Logout successful."))
}
