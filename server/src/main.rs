//! Lens profile page server
//!
//! Serves a single account's public profile as server-rendered HTML
//! and proxies the three Lens GraphQL operations for clients that
//! fetch the data themselves.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lenspage_profile::{LensClient, ProfileConfig, ProfileService};

mod error;
mod handlers;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<ProfileService<LensClient>>,
    pub http: reqwest::Client,
    pub config: ProfileConfig,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(handlers::profile_page))
        .route("/api/proxy/accounts", post(handlers::proxy_accounts))
        .route("/api/proxy/stats", post(handlers::proxy_stats))
        .route("/api/proxy/posts", post(handlers::proxy_posts))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lenspage_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ProfileConfig::from_env();
    tracing::info!(handle = %config.default_handle(), "Starting profile server");

    let lens = Arc::new(LensClient::from_config(&config));
    let profile_service = Arc::new(ProfileService::new(lens));

    let state = AppState {
        profile_service,
        http: reqwest::Client::new(),
        config,
    };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
