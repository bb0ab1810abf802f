//! Aggregates shown alongside the filtered lists.
//!
//! Everything here is derived from the same immutable catalog the lists use;
//! nothing is cached between calls.

use serde::Serialize;

use crate::badge::Badged;
use crate::calendar::CalendarDay;
use crate::filter::Filter;
use crate::model::*;

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

/// Restaurants listed in the admin activity chart.
const ACTIVITY_CHART_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Share<K> {
    pub key: K,
    pub label: &'static str,
    pub count: usize,
    /// `0.0..=100.0`; zero when the population is empty.
    pub percent: f64,
}

#[allow(clippy::cast_precision_loss)]
fn percent(count: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { count as f64 / total as f64 * 100.0 }
}

fn shares<K: Copy + PartialEq + Badged, T>(keys: &[K], rows: &[&T], key_of: impl Fn(&T) -> K) -> Vec<Share<K>> {
    keys.iter()
        .map(|key| {
            let count = rows.iter().filter(|r| key_of(**r) == *key).count();
            Share { key: *key, label: key.badge().label, count, percent: percent(count, rows.len()) }
        })
        .collect()
}

// =============================================================================
// RESERVATIONS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReservationBreakdown {
    pub total: usize,
    pub by_status: Vec<Share<ReservationStatus>>,
    pub by_source: Vec<Share<ReservationSource>>,
}

/// Status and source distribution of the displayed reservations.
#[must_use]
pub fn reservation_breakdown(rows: &[&Reservation]) -> ReservationBreakdown {
    ReservationBreakdown {
        total: rows.len(),
        by_status: shares(ReservationStatus::ALL, rows, |r| r.status),
        by_source: shares(ReservationSource::ALL, rows, |r| r.source),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: CalendarDay,
    pub weekday: &'static str,
    pub reservations: usize,
    pub selected: bool,
}

/// Reservation counts for the week strip around `selected`.
///
/// Counts ignore search and status filters; only the tenant filter applies.
#[must_use]
pub fn week_strip(all: &[Reservation], selected: CalendarDay, restaurant: &Filter<String>) -> Vec<DayCount> {
    selected
        .week_around()
        .into_iter()
        .map(|day| {
            let key = day.to_string();
            let reservations = all
                .iter()
                .filter(|r| r.date == key && restaurant.admits_str(&r.restaurant_id))
                .count();
            DayCount { date: day, weekday: day.weekday_short(), reservations, selected: day == selected }
        })
        .collect()
}

// =============================================================================
// MENU
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub available: usize,
    pub total: usize,
}

/// Per-category availability, categories in first-appearance order.
#[must_use]
pub fn menu_categories(items: &[MenuItem], restaurant: &Filter<String>) -> Vec<CategorySummary> {
    let mut out: Vec<CategorySummary> = Vec::new();
    for item in items.iter().filter(|m| restaurant.admits_str(&m.restaurant_id)) {
        let idx = match out.iter().position(|c| c.category == item.category) {
            Some(idx) => idx,
            None => {
                out.push(CategorySummary { category: item.category.clone(), available: 0, total: 0 });
                out.len() - 1
            }
        };
        out[idx].total += 1;
        if item.available {
            out[idx].available += 1;
        }
    }
    out
}

// =============================================================================
// DASHBOARDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RestaurantActivity {
    pub id: String,
    pub name: String,
    pub interactions: u32,
    pub resolution_percent: f64,
}

/// Super-admin landing page figures.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Overview {
    pub restaurants: usize,
    pub by_status: Vec<Share<RestaurantStatus>>,
    pub total_interactions: u64,
    pub mean_resolution_rate: f64,
    pub activity: Vec<RestaurantActivity>,
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn overview(catalog: &Catalog) -> Overview {
    let rows: Vec<&Restaurant> = catalog.restaurants.iter().collect();
    let total_interactions = rows.iter().map(|r| u64::from(r.total_interactions)).sum();
    let mean_resolution_rate = if rows.is_empty() {
        0.0
    } else {
        rows.iter().map(|r| r.resolution_rate).sum::<f64>() / rows.len() as f64
    };
    let activity = rows
        .iter()
        .take(ACTIVITY_CHART_LIMIT)
        .map(|r| RestaurantActivity {
            id: r.id.clone(),
            name: r.name.clone(),
            interactions: r.total_interactions,
            resolution_percent: r.resolution_rate * 100.0,
        })
        .collect();

    Overview {
        restaurants: rows.len(),
        by_status: shares(RestaurantStatus::ALL, &rows, |r| r.status),
        total_interactions,
        mean_resolution_rate,
        activity,
    }
}

/// Restaurant landing page: latest metric plus the tenant's conversations.
#[derive(Debug, PartialEq, Serialize)]
pub struct RestaurantSummary<'a> {
    pub restaurant: &'a Restaurant,
    pub latest: DailyMetric,
    pub conversations: Vec<&'a Conversation>,
}

#[must_use]
pub fn restaurant_summary<'a>(catalog: &'a Catalog, restaurant_id: &str) -> Option<RestaurantSummary<'a>> {
    let restaurant = catalog.restaurant(restaurant_id)?;
    let latest = catalog
        .metrics_for(restaurant_id)
        .first()
        .map_or_else(|| DailyMetric::zero(restaurant_id), |m| (*m).clone());
    let conversations = catalog
        .conversations
        .iter()
        .filter(|c| c.restaurant_id == restaurant_id)
        .collect();
    Some(RestaurantSummary { restaurant, latest, conversations })
}

// =============================================================================
// NOTIFICATIONS + INTEGRATIONS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CampaignPerformance {
    pub id: String,
    pub title: String,
    pub sent_at: Option<String>,
    pub open_rate: f64,
    pub click_rate: f64,
}

/// Engagement of sent campaigns, in source order.
#[must_use]
pub fn campaign_performance<'a>(campaigns: impl IntoIterator<Item = &'a Campaign>) -> Vec<CampaignPerformance> {
    campaigns
        .into_iter()
        .filter(|c| c.status == CampaignStatus::Sent)
        .map(|c| CampaignPerformance {
            id: c.id.clone(),
            title: c.title.clone(),
            sent_at: c.sent_at.clone(),
            open_rate: c.open_rate.unwrap_or_default(),
            click_rate: c.click_rate.unwrap_or_default(),
        })
        .collect()
}

/// Integration status for a restaurant, falling back to the first record.
#[must_use]
pub fn integration_for<'a>(catalog: &'a Catalog, restaurant_id: &str) -> Option<&'a Integration> {
    catalog
        .integrations
        .iter()
        .find(|i| i.restaurant_id == restaurant_id)
        .or_else(|| catalog.integrations.first())
}
