use activity_dashboard::controller::Dashboard;
use activity_dashboard::loader::DataSource;
use activity_dashboard::models::{ViewResponse, ViewStatus};
use activity_dashboard::{AppState, router};
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    Router,
};
use std::io::Write;
use tower::util::ServiceExt;

const DATA: &str = r#"[
  {"title": "Work", "timeframes": {"daily": {"current": 5, "previous": 7}, "weekly": {"current": 32, "previous": 36}}},
  {"title": "Self Care", "timeframes": {"daily": {"current": 0, "previous": 1}, "weekly": {"current": 2, "previous": 2}}}
]"#;

async fn loaded_app() -> (Router, tempfile::NamedTempFile) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DATA.as_bytes()).unwrap();

    let state = AppState::new(
        DataSource::File(file.path().to_path_buf()),
        Dashboard::new(&["daily", "weekly"], "daily"),
    );
    state.load().await;
    (router(state), file)
}

fn pending_app() -> Router {
    let state = AppState::new(
        DataSource::File("unused.json".into()),
        Dashboard::new(&["daily", "weekly"], "daily"),
    );
    router(state)
}

fn post_timeframe(timeframe: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/timeframe")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::json!({ "timeframe": timeframe }).to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_renders_cards_for_default_timeframe() {
    let (app, _file) = loaded_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("bg-card-self-care"));
    assert!(html.contains(r#"<p class="hours">5hrs</p>"#));
    assert!(html.contains(r#"<p class="previous">Yesterday - 1hr</p>"#));
}

#[tokio::test]
async fn switching_timeframe_returns_new_cards() {
    let (app, _file) = loaded_app().await;

    let response = app.clone().oneshot(post_timeframe("weekly")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let view: ViewResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(view.changed);
    assert_eq!(view.timeframe, "weekly");
    assert_eq!(view.cards.len(), 2);
    assert_eq!(view.cards[0].previous, "Last Week - 36hrs");

    let response = app.oneshot(post_timeframe("weekly")).await.unwrap();
    let again: ViewResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(!again.changed);
    assert_eq!(again.grid, view.grid);
}

#[tokio::test]
async fn unknown_or_blank_timeframe_is_rejected() {
    let (app, _file) = loaded_app().await;

    let response = app.clone().oneshot(post_timeframe("hourly")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "unknown timeframe 'hourly'");

    let response = app.oneshot(post_timeframe("  ")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dataset_is_served_once_loaded() {
    let (app, _file) = loaded_app().await;

    let response = app
        .oneshot(Request::builder().uri("/data.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let dataset: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(dataset[1]["title"], "Self Care");
}

#[tokio::test]
async fn pending_load_shows_loading_state() {
    let app = pending_app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/data.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = app
        .oneshot(Request::builder().uri("/api/view").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let view: ViewResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(view.status, ViewStatus::Loading);
    assert!(view.grid.contains("Loading activity data..."));
}
