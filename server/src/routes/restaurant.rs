//! Restaurant-facing views.
//!
//! DESIGN
//! ======
//! Every handler here accepts either role. A restaurant admin's `restaurant`
//! filter is replaced with their own tenant (see [`AuthUser::scope`]), and
//! path-addressed restaurants must be their own.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use views::criteria::{
    CampaignCriteria, ConversationCriteria, DeepLinkCriteria, MenuCriteria, ReservationCriteria, UserCriteria,
};
use views::model::{Campaign, Conversation, MenuItem, Message, Reservation};
use views::stats::{self, CampaignPerformance, CategorySummary, DayCount, ReservationBreakdown};
use views::{CalendarDay, ListView, view};

use crate::routes::auth::AuthUser;
use crate::routes::error::ApiError;
use crate::routes::query::ViewQuery;
use crate::state::AppState;

/// `GET /api/restaurants/{id}/summary`: landing-page figures for one restaurant.
pub async fn summary(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(restaurant_id): Path<String>,
) -> Result<Response, ApiError> {
    auth.require_tenant(&restaurant_id)?;
    let summary = stats::restaurant_summary(&state.catalog, &restaurant_id)
        .ok_or(ApiError::NotFound { kind: "restaurant", id: restaurant_id })?;
    Ok(Json(summary).into_response())
}

/// `GET /api/conversations`
pub async fn conversations(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ViewQuery>,
) -> Result<Response, ApiError> {
    let criteria = ConversationCriteria {
        query: params.search(),
        status: params.status()?,
        channel: params.channel()?,
        restaurant: auth.scope(params.restaurant()),
    };
    Ok(Json(view(&state.catalog.conversations, &criteria)).into_response())
}

/// `GET /api/conversations/{id}`: one conversation and its message thread.
pub async fn conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(conversation_id): Path<String>,
) -> Result<Response, ApiError> {
    let not_found = || ApiError::NotFound { kind: "conversation", id: conversation_id.clone() };
    let conversation = state.catalog.conversation(&conversation_id).ok_or_else(not_found)?;
    // Another tenant's conversation is reported as missing rather than forbidden.
    if auth.require_tenant(&conversation.restaurant_id).is_err() {
        return Err(not_found());
    }
    let thread = state.catalog.messages_for(&conversation.id);
    Ok(Json(ConversationDetail { conversation, thread }).into_response())
}

#[derive(Serialize)]
pub struct ConversationDetail<'a> {
    #[serde(flatten)]
    pub conversation: &'a Conversation,
    /// Oldest first.
    pub thread: Vec<&'a Message>,
}

#[derive(Serialize)]
pub struct ReservationsPage<'a> {
    pub date: CalendarDay,
    pub view: ListView<'a, Reservation>,
    pub breakdown: ReservationBreakdown,
    pub week: Vec<DayCount>,
}

/// `GET /api/reservations`: one day's bookings with breakdown and week strip.
pub async fn reservations(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ViewQuery>,
) -> Result<Response, ApiError> {
    let date = params.date()?;
    let criteria = ReservationCriteria {
        date,
        query: params.search(),
        status: params.status()?,
        restaurant: auth.scope(params.restaurant()),
    };

    let list = view(&state.catalog.reservations, &criteria);
    let breakdown = stats::reservation_breakdown(list.items());
    let week = stats::week_strip(&state.catalog.reservations, date, &criteria.restaurant);
    Ok(Json(ReservationsPage { date, view: list, breakdown, week }).into_response())
}

#[derive(Serialize)]
pub struct MenuPage<'a> {
    pub view: ListView<'a, MenuItem>,
    pub categories: Vec<CategorySummary>,
}

/// `GET /api/menu`: menu items plus per-category availability.
pub async fn menu(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ViewQuery>,
) -> Result<Response, ApiError> {
    let criteria = MenuCriteria {
        query: params.search(),
        category: params.category(),
        restaurant: auth.scope(params.restaurant()),
        show_unavailable: params.show_unavailable()?,
    };
    let categories = stats::menu_categories(&state.catalog.menu_items, &criteria.restaurant);
    Ok(Json(MenuPage { view: view(&state.catalog.menu_items, &criteria), categories }).into_response())
}

#[derive(Serialize)]
pub struct CampaignsPage<'a> {
    pub view: ListView<'a, Campaign>,
    pub performance: Vec<CampaignPerformance>,
}

/// `GET /api/campaigns`: notification campaigns and sent-campaign engagement.
pub async fn campaigns(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ViewQuery>,
) -> Result<Response, ApiError> {
    let criteria = CampaignCriteria {
        query: params.search(),
        status: params.status()?,
        restaurant: auth.scope(params.restaurant()),
    };
    let performance = stats::campaign_performance(
        state.catalog.campaigns.iter().filter(|c| criteria.restaurant.admits_str(&c.restaurant_id)),
    );
    Ok(Json(CampaignsPage { view: view(&state.catalog.campaigns, &criteria), performance }).into_response())
}

/// `GET /api/deep-links`
pub async fn deep_links(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ViewQuery>,
) -> Result<Response, ApiError> {
    let criteria = DeepLinkCriteria { query: params.search(), restaurant: auth.scope(params.restaurant()) };
    Ok(Json(view(&state.catalog.deep_links, &criteria)).into_response())
}

/// `GET /api/users`: console operator accounts.
pub async fn users(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ViewQuery>,
) -> Result<Response, ApiError> {
    let criteria = UserCriteria { query: params.search(), role: params.role()?, status: params.status()? };
    Ok(Json(view(&state.catalog.users, &criteria)).into_response())
}

/// `GET /api/metrics/{restaurant_id}`: daily metrics, newest first.
pub async fn metrics(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(restaurant_id): Path<String>,
) -> Result<Response, ApiError> {
    auth.require_tenant(&restaurant_id)?;
    if state.catalog.restaurant(&restaurant_id).is_none() {
        return Err(ApiError::NotFound { kind: "restaurant", id: restaurant_id });
    }
    Ok(Json(state.catalog.metrics_for(&restaurant_id)).into_response())
}

/// `GET /api/agent-settings/{restaurant_id}`: the restaurant's agent persona.
pub async fn agent_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(restaurant_id): Path<String>,
) -> Result<Response, ApiError> {
    auth.require_tenant(&restaurant_id)?;
    if state.catalog.restaurant(&restaurant_id).is_none() {
        return Err(ApiError::NotFound { kind: "restaurant", id: restaurant_id });
    }
    let settings = state
        .catalog
        .agent_settings(&restaurant_id)
        .ok_or_else(|| ApiError::NotFound { kind: "agent settings", id: restaurant_id.clone() })?;
    Ok(Json(settings).into_response())
}

#[cfg(test)]
#[path = "restaurant_test.rs"]
mod tests;
