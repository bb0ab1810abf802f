//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API consumed by the console front end. Each
//! page of the console has one endpoint returning its derived view; the root
//! path redirects to the page the current session lands on.

pub mod admin;
pub mod auth;
pub mod error;
pub mod query;
pub mod restaurant;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use views::Route;
use views::auth::Area;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = if state.config.cors_allow_any {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(auth::root))
        .route("/healthz", get(healthz))
        .route("/api/routes", get(routes))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/dashboard", get(admin::dashboard))
        .route("/api/restaurants", get(admin::restaurants))
        .route("/api/restaurants/{id}/summary", get(restaurant::summary))
        .route("/api/conversations", get(restaurant::conversations))
        .route("/api/conversations/{id}", get(restaurant::conversation))
        .route("/api/reservations", get(restaurant::reservations))
        .route("/api/menu", get(restaurant::menu))
        .route("/api/campaigns", get(restaurant::campaigns))
        .route("/api/deep-links", get(restaurant::deep_links))
        .route("/api/users", get(restaurant::users))
        .route("/api/flows", get(admin::flows))
        .route("/api/integrations/{restaurant_id}", get(admin::integration))
        .route("/api/metrics", get(admin::metrics_report))
        .route("/api/metrics/{restaurant_id}", get(restaurant::metrics))
        .route("/api/agent-config", get(admin::agent_config))
        .route("/api/agent-settings/{restaurant_id}", get(restaurant::agent_settings))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
pub struct RouteEntry {
    pub route: Route,
    pub path: &'static str,
    pub area: Area,
}

/// `GET /api/routes`: the console's page table.
async fn routes() -> Json<Vec<RouteEntry>> {
    Json(Route::ALL.iter().map(|&route| RouteEntry { route, path: route.path(), area: route.area() }).collect())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
