use crate::errors::AppError;
use crate::models::{Dataset, TimeframeRequest, ViewResponse};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let dashboard = state.dashboard.lock().await;
    Html(render_index(&dashboard))
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn get_view(State(state): State<AppState>) -> Json<ViewResponse> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.view(false))
}

pub async fn get_dataset(State(state): State<AppState>) -> Result<Json<Dataset>, AppError> {
    let dashboard = state.dashboard.lock().await;
    match dashboard.dataset() {
        Some(dataset) => Ok(Json(dataset.clone())),
        None => Err(AppError::unavailable("activity data is not available")),
    }
}

pub async fn select_timeframe(
    State(state): State<AppState>,
    Json(payload): Json<TimeframeRequest>,
) -> Result<Json<ViewResponse>, AppError> {
    let key = payload.timeframe.trim();
    if key.is_empty() {
        return Err(AppError::bad_request("timeframe must not be empty"));
    }

    let mut dashboard = state.dashboard.lock().await;
    let changed = dashboard.select_timeframe(key)?;
    Ok(Json(dashboard.view(changed)))
}
