//! Extractors whose rejections answer with the same `{"detail": ...}` body
//! as every other client error.

use axum::extract::rejection::{FormRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::StatsError;

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(StatsError))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(StatsError))]
pub struct ApiPath<T>(pub T);

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(StatsError))]
pub struct ApiForm<T>(pub T);

impl From<QueryRejection> for StatsError {
    fn from(rejection: QueryRejection) -> Self {
        StatsError::invalid(rejection.body_text())
    }
}

impl From<PathRejection> for StatsError {
    fn from(rejection: PathRejection) -> Self {
        StatsError::invalid(rejection.body_text())
    }
}

impl From<FormRejection> for StatsError {
    fn from(rejection: FormRejection) -> Self {
        StatsError::invalid(rejection.body_text())
    }
}
