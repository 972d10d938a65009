//! API Errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use acadira_core::SiteError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Errors a handler can answer with
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Site(#[from] SiteError),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::Site(SiteError::UnknownRoute(_)) => StatusCode::NOT_FOUND,
            Self::Site(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            Self::NotFound(path) => ErrorResponse {
                error: format!("Nothing is served at '{path}'."),
                code: "NOT_FOUND".into(),
            },
            Self::Site(err) => ErrorResponse {
                error: err.user_message(),
                code: err.code().into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }
        (status, Json(self.body())).into_response()
    }
}
