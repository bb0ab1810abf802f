//! Console-wide routes reserved for the super admin.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use views::badge::{Badge, Badged};
use views::criteria::{FlowCriteria, RestaurantCriteria};
use views::metrics::{self, RestaurantSelection};
use views::model::{AgentConfig, AgentModel, Integration};
use views::{ParseError, stats, view};

use crate::routes::auth::AuthUser;
use crate::routes::error::ApiError;
use crate::routes::query::ViewQuery;
use crate::state::AppState;

/// `GET /api/dashboard`: restaurant counts, interactions and activity chart.
pub async fn dashboard(State(state): State<AppState>, auth: AuthUser) -> Result<Json<stats::Overview>, ApiError> {
    auth.require_super_admin()?;
    Ok(Json(stats::overview(&state.catalog)))
}

/// `GET /api/restaurants`: search name/address, filter by status.
pub async fn restaurants(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ViewQuery>,
) -> Result<Response, ApiError> {
    auth.require_super_admin()?;
    let criteria = RestaurantCriteria { query: params.search(), status: params.status()? };
    Ok(Json(view(&state.catalog.restaurants, &criteria)).into_response())
}

/// `GET /api/flows`: automation flows by status and restaurant.
pub async fn flows(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ViewQuery>,
) -> Result<Response, ApiError> {
    auth.require_super_admin()?;
    let criteria = FlowCriteria { status: params.status()?, restaurant: params.restaurant() };
    Ok(Json(view(&state.catalog.flows, &criteria)).into_response())
}

#[derive(Serialize)]
pub struct IntegrationResponse<'a> {
    #[serde(flatten)]
    pub integration: &'a Integration,
    pub badge: Badge,
}

/// `GET /api/integrations/{restaurant_id}`: reservation-system sync status.
pub async fn integration(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(restaurant_id): Path<String>,
) -> Result<Response, ApiError> {
    auth.require_super_admin()?;
    let integration = stats::integration_for(&state.catalog, &restaurant_id)
        .ok_or(ApiError::NotFound { kind: "integration", id: restaurant_id })?;
    let badge = integration.sync_status.badge();
    Ok(Json(IntegrationResponse { integration, badge }).into_response())
}

#[derive(Serialize)]
pub struct AgentConfigResponse<'a> {
    #[serde(flatten)]
    pub config: &'a AgentConfig,
    /// `None` when `default_model` names no listed model.
    pub selected_model: Option<&'a AgentModel>,
}

/// `GET /api/agent-config`: global model, instructions, functions and knobs.
pub async fn agent_config(State(state): State<AppState>, auth: AuthUser) -> Result<Response, ApiError> {
    auth.require_super_admin()?;
    let config = &state.catalog.agent_config;
    let selected_model = config.model(&config.default_model);
    Ok(Json(AgentConfigResponse { config, selected_model }).into_response())
}

/// `GET /api/metrics`: windowed report over a multi-restaurant selection.
///
/// `restaurants` picks the selection (default: first restaurant), `toggle`
/// flips one id in or out of it, `range` and `date` set the window.
pub async fn metrics_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ViewQuery>,
) -> Result<Response, ApiError> {
    auth.require_super_admin()?;
    let mut selection = RestaurantSelection::parse(params.restaurants.as_deref(), &state.catalog)?;
    if let Some(id) = params.toggle() {
        if state.catalog.restaurant(id).is_none() {
            return Err(ParseError::UnknownValue { kind: "restaurant", value: id.to_owned() }.into());
        }
        selection.toggle(id);
    }
    let report = metrics::metrics_report(&state.catalog, selection, params.range()?, params.explicit_date()?);
    Ok(Json(report).into_response())
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
