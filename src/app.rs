use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/data.json", get(handlers::get_dataset))
        .route("/api/view", get(handlers::get_view))
        .route("/api/timeframe", post(handlers::select_timeframe))
        .with_state(state)
}
