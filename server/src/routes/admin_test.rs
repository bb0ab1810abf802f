use axum::http::StatusCode;

use crate::state::test_helpers::{self, get};

// =============================================================================
// dashboard
// =============================================================================

#[tokio::test]
async fn dashboard_reports_overview() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/dashboard", Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["restaurants"], 5);
    assert_eq!(res.json["total_interactions"], 4409);
    assert_eq!(res.json["activity"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn dashboard_is_forbidden_to_restaurant_admin() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_restaurant_admin(&state, "1").await;

    let res = get(&state, "/api/dashboard", Some(&token)).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.json["error"], "not permitted for this account");
}

#[tokio::test]
async fn dashboard_requires_session() {
    let state = test_helpers::test_app_state();
    assert_eq!(get(&state, "/api/dashboard", None).await.status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// restaurants
// =============================================================================

#[tokio::test]
async fn restaurants_filtered_by_status_and_query() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/restaurants?q=barcelona&status=active", Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["state"], "rows");
    assert_eq!(res.json["count"], 1);
    assert_eq!(res.json["items"][0]["name"], "Sushi Sakura");
}

#[tokio::test]
async fn restaurants_without_matches_show_empty_state() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/restaurants?q=lisbon", Some(&token)).await;
    assert_eq!(
        res.json,
        serde_json::json!({ "state": "empty", "message": "No restaurants found matching your criteria" })
    );
}

#[tokio::test]
async fn restaurants_reject_unknown_status() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/restaurants?status=bogus", Some(&token)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["error"], "unknown restaurant status: \"bogus\"");
}

// =============================================================================
// flows + integrations
// =============================================================================

#[tokio::test]
async fn flows_filtered_by_restaurant() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/flows?restaurant=2", Some(&token)).await;
    assert_eq!(res.json["count"], 2);

    let res = get(&state, "/api/flows?status=error", Some(&token)).await;
    assert_eq!(res.json["items"][0]["name"], "Apparta Integration");
}

#[tokio::test]
async fn integration_status_with_badge() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/integrations/2", Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["restaurant_id"], "2");
    assert_eq!(res.json["sync_status"], "warning");
    assert_eq!(res.json["badge"], serde_json::json!({ "label": "Partial Sync", "variant": "warning" }));
}

#[tokio::test]
async fn unknown_integration_falls_back_to_first() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/integrations/99", Some(&token)).await;
    assert_eq!(res.json["restaurant_id"], "1");
}

#[tokio::test]
async fn integrations_are_admin_only() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_restaurant_admin(&state, "1").await;
    assert_eq!(get(&state, "/api/integrations/1", Some(&token)).await.status, StatusCode::FORBIDDEN);
}

// =============================================================================
// agent config
// =============================================================================

#[tokio::test]
async fn agent_config_lists_models_and_functions() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/agent-config", Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["default_model"], "gpt-4");
    assert_eq!(res.json["selected_model"]["name"], "GPT-4 Turbo");
    assert_eq!(res.json["models"].as_array().map(Vec::len), Some(5));
    assert_eq!(res.json["functions"][1]["name"], "create_reservation");
    assert_eq!(res.json["functions"][1]["parameters"][0]["name"], "customer_name");
    assert_eq!(res.json["parameters"]["max_response_tokens"], 1000);
    assert!(res.json["instructions"].as_str().is_some_and(|s| s.starts_with("You are a helpful AI assistant")));
}

#[tokio::test]
async fn agent_config_is_admin_only() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_restaurant_admin(&state, "1").await;
    assert_eq!(get(&state, "/api/agent-config", Some(&token)).await.status, StatusCode::FORBIDDEN);
}

// =============================================================================
// metrics report
// =============================================================================

#[tokio::test]
async fn metrics_report_defaults_to_first_restaurant_and_week() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/metrics", Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["range"], "week");
    assert_eq!(res.json["restaurants"], serde_json::json!(["1"]));
    assert_eq!(res.json["window"], serde_json::json!({ "from": "2023-07-09", "to": "2023-07-15" }));
    assert_eq!(res.json["days"].as_array().map(Vec::len), Some(2));
    assert_eq!(res.json["totals"]["conversations"], 83);
    assert_eq!(res.json["top_topics"][0], serde_json::json!({ "topic": "Reservations", "count": 34 }));
}

#[tokio::test]
async fn metrics_report_range_and_date_narrow_the_window() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/metrics?range=day&date=2023-07-14", Some(&token)).await;
    assert_eq!(res.json["days"].as_array().map(Vec::len), Some(1));
    assert_eq!(res.json["totals"]["conversations"], 38);
}

#[tokio::test]
async fn metrics_toggle_keeps_at_least_one_restaurant() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/metrics?restaurants=1,2&toggle=1", Some(&token)).await;
    assert_eq!(res.json["restaurants"], serde_json::json!(["2"]));
    assert_eq!(res.json["days"], serde_json::json!([]));

    let res = get(&state, "/api/metrics?restaurants=2&toggle=2", Some(&token)).await;
    assert_eq!(res.json["restaurants"], serde_json::json!(["2"]));

    let res = get(&state, "/api/metrics?restaurants=2&toggle=4", Some(&token)).await;
    assert_eq!(res.json["restaurants"], serde_json::json!(["2", "4"]));

    let res = get(&state, "/api/metrics?restaurants=all", Some(&token)).await;
    assert_eq!(res.json["restaurants"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn metrics_report_rejects_bad_parameters() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    for uri in ["/api/metrics?restaurants=1,9", "/api/metrics?toggle=9", "/api/metrics?range=decade", "/api/metrics?date=07-14"] {
        let res = get(&state, uri, Some(&token)).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(res.json["error"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn metrics_report_is_admin_only() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_restaurant_admin(&state, "1").await;
    assert_eq!(get(&state, "/api/metrics", Some(&token)).await.status, StatusCode::FORBIDDEN);
}
