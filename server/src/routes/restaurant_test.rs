use axum::http::StatusCode;

use crate::state::test_helpers::{self, get};

fn ids(json: &serde_json::Value) -> Vec<String> {
    json["items"]
        .as_array()
        .map(|items| items.iter().filter_map(|i| i["id"].as_str().map(str::to_owned)).collect())
        .unwrap_or_default()
}

// =============================================================================
// summary + metrics
// =============================================================================

#[tokio::test]
async fn summary_for_own_restaurant() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_restaurant_admin(&state, "1").await;

    let res = get(&state, "/api/restaurants/1/summary", Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["restaurant"]["name"], "La Trattoria");
    assert_eq!(res.json["latest"]["conversations"], 45);
    assert_eq!(res.json["conversations"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn summary_for_other_tenant_is_forbidden() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_restaurant_admin(&state, "1").await;
    assert_eq!(get(&state, "/api/restaurants/2/summary", Some(&token)).await.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn summary_for_unknown_restaurant_is_not_found() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/restaurants/99/summary", Some(&token)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json["error"], "restaurant not found: 99");
}

#[tokio::test]
async fn metrics_newest_first() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/metrics/1", Some(&token)).await;
    let dates: Vec<&str> = res.json.as_array().expect("array").iter().filter_map(|m| m["date"].as_str()).collect();
    assert_eq!(dates, ["2023-07-15", "2023-07-14"]);

    let res = get(&state, "/api/metrics/3", Some(&token)).await;
    assert_eq!(res.json, serde_json::json!([]));
}

// =============================================================================
// conversations
// =============================================================================

#[tokio::test]
async fn restaurant_admin_sees_only_own_conversations() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_restaurant_admin(&state, "1").await;

    let res = get(&state, "/api/conversations?restaurant=2", Some(&token)).await;
    assert_eq!(ids(&res.json), ["1", "2", "5"]);
}

#[tokio::test]
async fn super_admin_filters_conversations_by_channel() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/conversations?channel=instagram&status=all", Some(&token)).await;
    assert_eq!(ids(&res.json), ["4"]);
}

#[tokio::test]
async fn conversation_empty_state() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/conversations?q=nobody", Some(&token)).await;
    assert_eq!(res.json, serde_json::json!({ "state": "empty", "message": "No conversations found" }));
}

#[tokio::test]
async fn conversation_detail_hides_other_tenants() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_restaurant_admin(&state, "1").await;

    let res = get(&state, "/api/conversations/1", Some(&token)).await;
    assert_eq!(res.json["customer_name"], "María García");
    assert_eq!(get(&state, "/api/conversations/3", Some(&token)).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn conversation_detail_carries_thread_oldest_first() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/conversations/1", Some(&token)).await;
    let thread = res.json["thread"].as_array().cloned().unwrap_or_default();
    assert_eq!(thread.len(), 7);
    assert_eq!(thread[0]["sender"], "customer");
    assert_eq!(thread[1]["sender"], "agent");
    assert_eq!(thread[6]["timestamp"], "2023-07-15T18:35:00Z");

    let res = get(&state, "/api/conversations/3", Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["thread"], serde_json::json!([]));
}

// =============================================================================
// agent settings
// =============================================================================

#[tokio::test]
async fn agent_settings_for_own_restaurant() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_restaurant_admin(&state, "1").await;

    let res = get(&state, "/api/agent-settings/1", Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["agent_name"], "Trattoria Assistant");
    assert_eq!(res.json["style"], "friendly");
    assert!(res.json["greeting"].as_str().is_some_and(|g| g.starts_with("Welcome to La Trattoria!")));
    assert!(res.json["farewell"].as_str().is_some_and(|g| g.ends_with("Buon appetito!")));

    assert_eq!(get(&state, "/api/agent-settings/2", Some(&token)).await.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn agent_settings_missing_or_unknown_restaurant() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/agent-settings/2", Some(&token)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json["error"], "agent settings not found: 2");

    let res = get(&state, "/api/agent-settings/9", Some(&token)).await;
    assert_eq!(res.json["error"], "restaurant not found: 9");
}

// =============================================================================
// reservations
// =============================================================================

#[tokio::test]
async fn reservations_for_day_sorted_with_breakdown_and_week() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/reservations?date=2023-07-20", Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["date"], "2023-07-20");
    assert_eq!(ids(&res.json["view"]), ["4", "1", "5"]);
    assert_eq!(res.json["breakdown"]["total"], 3);
    let week: Vec<u64> = res.json["week"]
        .as_array()
        .expect("week")
        .iter()
        .filter_map(|d| d["reservations"].as_u64())
        .collect();
    assert_eq!(week, [0, 0, 0, 3, 1, 1, 0]);
}

#[tokio::test]
async fn reservations_pinned_to_tenant() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_restaurant_admin(&state, "1").await;

    let res = get(&state, "/api/reservations?date=2023-07-20&restaurant=all", Some(&token)).await;
    assert_eq!(ids(&res.json["view"]), ["4", "1"]);
    assert_eq!(res.json["week"][3]["reservations"], 2);
}

#[tokio::test]
async fn reservations_empty_day() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/reservations?date=2023-07-25", Some(&token)).await;
    assert_eq!(res.json["view"]["message"], "No reservations found for this date");
    assert_eq!(res.json["breakdown"]["total"], 0);
}

#[tokio::test]
async fn reservations_reject_malformed_date() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;
    assert_eq!(get(&state, "/api/reservations?date=tomorrow", Some(&token)).await.status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// menu, campaigns, deep links, users
// =============================================================================

#[tokio::test]
async fn menu_hides_unavailable_unless_requested() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_restaurant_admin(&state, "1").await;

    let res = get(&state, "/api/menu", Some(&token)).await;
    assert_eq!(ids(&res.json["view"]), ["1", "2", "3"]);
    assert_eq!(res.json["categories"][0], serde_json::json!({ "category": "Pizzas", "available": 1, "total": 2 }));

    let res = get(&state, "/api/menu?show_unavailable=true&category=Pizzas", Some(&token)).await;
    assert_eq!(ids(&res.json["view"]), ["1", "4"]);
}

#[tokio::test]
async fn menu_rejects_malformed_flag_with_json_error() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/menu?show_unavailable=maybe", Some(&token)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json, serde_json::json!({ "error": "unknown show_unavailable flag: \"maybe\"" }));

    let res = get(&state, "/api/menu?show_unavailable=1", Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn campaigns_with_performance_for_tenant() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/campaigns?restaurant=2", Some(&token)).await;
    assert_eq!(ids(&res.json["view"]), ["4", "5"]);
    assert_eq!(res.json["performance"].as_array().map(Vec::len), Some(1));
    assert_eq!(res.json["performance"][0]["title"], "Sushi Tuesday");
}

#[tokio::test]
async fn campaigns_reject_unknown_status() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;
    assert_eq!(get(&state, "/api/campaigns?status=queued", Some(&token)).await.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deep_links_search_by_kind() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_super_admin(&state).await;

    let res = get(&state, "/api/deep-links?q=event", Some(&token)).await;
    assert_eq!(ids(&res.json), ["5"]);
}

#[tokio::test]
async fn users_filtered_by_role_and_status() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_restaurant_admin(&state, "1").await;

    let res = get(&state, "/api/users?role=staff&status=active", Some(&token)).await;
    assert_eq!(ids(&res.json), ["2", "3"]);

    let res = get(&state, "/api/users?role=owner", Some(&token)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}
