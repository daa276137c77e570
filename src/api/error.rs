use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};

use super::models::ErrorResponse;
use crate::errors::StatsError;

impl StatsError {
    pub fn status(&self) -> StatusCode {
        match self {
            StatsError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            StatsError::NotFound(_) => StatusCode::NOT_FOUND,
            StatsError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            StatsError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {self}");
        } else if status == StatusCode::BAD_REQUEST {
            warn!("Rejected request: {self}");
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
