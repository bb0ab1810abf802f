use super::*;
use crate::state::test_helpers::{self, get};

#[tokio::test]
async fn healthz_is_ok() {
    let state = test_helpers::test_app_state();
    assert_eq!(get(&state, "/healthz", None).await.status, StatusCode::OK);
}

#[tokio::test]
async fn route_table_lists_every_page() {
    let state = test_helpers::test_app_state();
    let res = get(&state, "/api/routes", None).await;

    let entries = res.json.as_array().expect("array");
    assert_eq!(entries.len(), Route::ALL.len());
    assert_eq!(entries[0], serde_json::json!({ "route": "login", "path": "/login", "area": "public" }));
    assert!(entries.iter().any(|e| e["path"] == "/n8n-flows" && e["area"] == "admin"));
    assert!(entries.iter().any(|e| e["path"] == "/menu" && e["area"] == "restaurant"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let state = test_helpers::test_app_state();
    assert_eq!(get(&state, "/api/nope", None).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let state = test_helpers::test_app_state();
    let request = axum::http::Request::get("/healthz")
        .header(axum::http::header::ORIGIN, "http://localhost:5173")
        .body(axum::body::Body::empty())
        .expect("request");
    let res = test_helpers::send(&state, request).await;
    assert_eq!(res.headers[axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
