use activity_dashboard::errors::LoadError;
use activity_dashboard::loader::{DataSource, load};
use activity_dashboard::models::ViewStatus;
use activity_dashboard::Dashboard;
use axum::{http::StatusCode, routing::get, Router};

const DATA: &str = r#"[
  {"title": "Reading", "timeframes": {"daily": {"current": 1, "previous": 2}}},
  {"title": "Deep Work", "timeframes": {"weekly": {"current": 6, "previous": 4}}}
]"#;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn loads_dataset_over_http() {
    let base = serve(Router::new().route("/data.json", get(|| async { DATA }))).await;

    let dataset = load(&DataSource::Url(format!("{base}/data.json"))).await.unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset[0].title, "Reading");

    let mut dashboard = Dashboard::new(&["daily", "weekly"], "daily");
    dashboard.finish_load(Ok(dataset));
    let view = dashboard.view(false);
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].hours, "1hr");
    assert_eq!(view.cards[0].previous, "Yesterday - 2hrs");
}

#[tokio::test]
async fn not_found_status_becomes_error_placeholder() {
    let base = serve(Router::new()).await;

    let result = load(&DataSource::Url(format!("{base}/data.json"))).await;
    assert!(matches!(result, Err(LoadError::Status { status: 404 })));

    let mut dashboard = Dashboard::new(&["daily", "weekly"], "daily");
    dashboard.finish_load(result);
    let view = dashboard.view(false);
    assert_eq!(view.status, ViewStatus::Failed);
    assert!(view.cards.is_empty());
    assert!(view.grid.contains(r#"class="error-text""#));
    assert!(view.grid.contains("HTTP error! status: 404"));
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let base = serve(Router::new().route(
        "/data.json",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;

    let err = load(&DataSource::Url(format!("{base}/data.json"))).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn garbage_body_is_a_parse_failure() {
    let base = serve(Router::new().route("/data.json", get(|| async { "<html>nope</html>" }))).await;

    let err = load(&DataSource::Url(format!("{base}/data.json"))).await.unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[tokio::test]
async fn refused_connection_is_a_transport_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = load(&DataSource::Url(format!("http://127.0.0.1:{port}/data.json")))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Transport(_)));
}
