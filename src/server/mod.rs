//! JSON API: scoring, share-token decoding and feedback collection.

pub mod error;
pub mod routes;
pub mod state;

pub use self::error::{AppError, AppResult};
pub use self::state::AppState;

use crate::catalog;
use crate::config::Config;
use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: Arc<AppState>) -> Router {
    routes::system_routes()
        .merge(routes::checkin_routes())
        .merge(routes::feedback_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    catalog::validate_catalog()?;
    let addr = config.bind_addr();
    info!("📂 Feedback file: {:?}", config.feedback.feedback_file);

    let state = Arc::new(AppState::new(config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Check-in API listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
