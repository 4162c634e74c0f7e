pub mod config;
pub mod db;
pub mod errors;
pub mod forms;
pub mod http;
mod middleware;
pub mod models;
pub mod pages;
pub mod reviews;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use middleware::{cors_layer, create_rate_limiter, rate_limit_middleware};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config, db::SupabaseStore, errors::AppError, http::handlers::not_found_handler,
    state::AppState,
};

/// Every page and endpoint over `state`, without the per-IP and CORS layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(http::create_http_routes(state))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = SupabaseStore::new(&config.supabase_url, &config.supabase_anon_key);
    let state = AppState::new(Arc::new(store)).with_reviews_limit(config.reviews_limit);

    let rate_limiter = create_rate_limiter(config.rate_limit_per_minute);

    let app = app(state)
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer(&config.allowed_origins));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|e| AppError::ServerError(format!("Failed to bind port {}: {e}", config.port)))?;

    tracing::info!("Coach reviews running at http://127.0.0.1:{}", config.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::ServerError(e.to_string()))
}
