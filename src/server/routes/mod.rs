pub mod checkin;
pub mod feedback;
pub mod system;

use crate::server::state::AppState;
use axum::Router;
use std::sync::Arc;

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", axum::routing::get(system::root))
        .route("/health", axum::routing::get(system::health))
}

pub fn checkin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/questions", axum::routing::get(checkin::questions))
        .route("/api/checkin", axum::routing::post(checkin::submit))
        .route("/api/share/{token}", axum::routing::get(checkin::decode))
}

pub fn feedback_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/feedback",
            axum::routing::post(feedback::submit).get(feedback::list),
        )
        .route("/api/feedback/summary", axum::routing::get(feedback::summary))
}
