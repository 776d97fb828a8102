//! HTTP error type
//!
//! Wraps the profile pipeline errors for axum responses. Upstream
//! failures map to 502 since this server is a thin layer over the
//! Lens API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use lenspage_profile::ProfileError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Request body must be a JSON object")]
    InvalidBody,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            ServerError::Profile(e) => {
                tracing::error!("Profile load failed: {}", e);
                (StatusCode::BAD_GATEWAY, "Upstream error", Some(e.to_string()))
            }
            ServerError::Upstream(e) => {
                tracing::error!("Proxy request failed: {}", e);
                (StatusCode::BAD_GATEWAY, "Upstream unreachable", None)
            }
            ServerError::InvalidBody => (
                StatusCode::BAD_REQUEST,
                "Invalid request body",
                Some("expected a JSON object".to_string()),
            ),
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}
