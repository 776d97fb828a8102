//! GraphQL proxy handlers
//!
//! Forward `{query, variables}` bodies to the upstream Lens endpoint
//! and relay the JSON response unchanged. The accounts route fills in
//! default variables from the configured identity when the client
//! sends none.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::ServerError;
use crate::AppState;

const USER_AGENT: &str = "lens-profile-app";

/// POST /api/proxy/accounts
pub async fn proxy_accounts(
    State(state): State<AppState>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, ServerError> {
    let Some(request) = body.as_object_mut() else {
        return Err(ServerError::InvalidBody);
    };
    if request.get("variables").map_or(true, Value::is_null) {
        request.insert(
            "variables".to_string(),
            json!({
                "request": {
                    "username": {
                        "localName": state.config.local_name,
                        "namespace": state.config.namespace,
                    }
                }
            }),
        );
    }
    forward(&state, body).await
}

/// POST /api/proxy/stats
pub async fn proxy_stats(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ServerError> {
    forward(&state, body).await
}

/// POST /api/proxy/posts
pub async fn proxy_posts(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ServerError> {
    forward(&state, body).await
}

async fn forward(state: &AppState, body: Value) -> Result<Json<Value>, ServerError> {
    let response = state
        .http
        .post(&state.config.api_url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .header(reqwest::header::ACCEPT, "application/json")
        .json(&body)
        .send()
        .await?;

    let data: Value = response.json().await?;
    Ok(Json(data))
}
