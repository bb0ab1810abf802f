//! Metrics page: which restaurants are compared, over which window.
//!
//! DESIGN
//! ======
//! The selection is a non-empty, duplicate-free list of restaurant ids. Every
//! operation that could empty it (toggling the last id off, parsing an empty
//! list) falls back to a single restaurant instead. The report window ends on
//! an anchor day; without an explicit anchor it ends on the newest recorded
//! day of the selection so historical data stays visible.

use serde::Serialize;
use time::{Date, Duration};

use crate::calendar::CalendarDay;
use crate::error::ParseError;
use crate::model::{Catalog, DailyMetric, MetricsRange, TopicCount};

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

/// Restaurants compared on the metrics page. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RestaurantSelection(Vec<String>);

impl RestaurantSelection {
    /// The catalog's first restaurant, the page's initial state.
    #[must_use]
    pub fn first(catalog: &Catalog) -> Option<Self> {
        catalog.restaurants.first().map(|r| Self(vec![r.id.clone()]))
    }

    #[must_use]
    pub fn all(catalog: &Catalog) -> Option<Self> {
        let ids: Vec<String> = catalog.restaurants.iter().map(|r| r.id.clone()).collect();
        (!ids.is_empty()).then_some(Self(ids))
    }

    /// Parse a comma-separated id list.
    ///
    /// Absent or blank selects the first restaurant; `all` selects every
    /// restaurant. Repeated ids are kept once, in first-seen order.
    ///
    /// # Errors
    ///
    /// [`ParseError::UnknownValue`] for an id missing from `catalog`;
    /// [`ParseError::EmptySelection`] when the catalog has no restaurants.
    pub fn parse(raw: Option<&str>, catalog: &Catalog) -> Result<Self, ParseError> {
        let selection = match raw.map(str::trim).unwrap_or_default() {
            "" => Self::first(catalog),
            "all" => Self::all(catalog),
            list => {
                let mut ids: Vec<String> = Vec::new();
                for id in list.split(',').map(str::trim).filter(|id| !id.is_empty()) {
                    if catalog.restaurant(id).is_none() {
                        return Err(ParseError::UnknownValue { kind: "restaurant", value: id.to_owned() });
                    }
                    if !ids.iter().any(|known| known == id) {
                        ids.push(id.to_owned());
                    }
                }
                if ids.is_empty() { Self::first(catalog) } else { Some(Self(ids)) }
            }
        };
        selection.ok_or(ParseError::EmptySelection)
    }

    /// Add `id`, or remove it unless it is the only one selected.
    ///
    /// Returns whether the selection changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.0.iter().position(|known| known == id) {
            Some(_) if self.0.len() == 1 => false,
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => {
                self.0.push(id.to_owned());
                true
            }
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|known| known == id)
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

/// Inclusive day range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub from: CalendarDay,
    pub to: CalendarDay,
}

impl DateWindow {
    /// The `range.days()` days ending on `to`, clamped at the earliest date.
    #[must_use]
    pub fn ending(range: MetricsRange, to: CalendarDay) -> Self {
        let span = Duration::days(i64::from(range.days()) - 1);
        let from = to.date().checked_sub(span).unwrap_or(Date::MIN);
        Self { from: from.into(), to }
    }

    #[must_use]
    pub fn contains(self, day: CalendarDay) -> bool {
        self.from <= day && day <= self.to
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MetricsTotals {
    pub conversations: u64,
    pub reservations: u64,
    /// Means over the reported days; zero when nothing was recorded.
    pub mean_resolution_rate: f64,
    pub mean_satisfaction: f64,
    pub mean_response_secs: f64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MetricsReport<'a> {
    pub range: MetricsRange,
    pub window: DateWindow,
    pub restaurants: RestaurantSelection,
    /// Newest first.
    pub days: Vec<&'a DailyMetric>,
    pub totals: MetricsTotals,
    /// Topic counts summed over `days`, most frequent first.
    pub top_topics: Vec<TopicCount>,
}

/// Daily metrics of the selected restaurants inside the window ending on
/// `anchor`.
#[must_use]
pub fn metrics_report(
    catalog: &Catalog,
    restaurants: RestaurantSelection,
    range: MetricsRange,
    anchor: Option<CalendarDay>,
) -> MetricsReport<'_> {
    let recorded: Vec<(CalendarDay, &DailyMetric)> = catalog
        .metrics
        .iter()
        .filter(|m| restaurants.contains(&m.restaurant_id))
        .filter_map(|m| m.date.parse::<CalendarDay>().ok().map(|day| (day, m)))
        .collect();

    let to = anchor
        .or_else(|| recorded.iter().map(|(day, _)| *day).max())
        .unwrap_or_else(CalendarDay::today);
    let window = DateWindow::ending(range, to);

    let mut days: Vec<&DailyMetric> = recorded
        .iter()
        .filter(|(day, _)| window.contains(*day))
        .map(|(_, m)| *m)
        .collect();
    days.sort_by(|a, b| b.date.cmp(&a.date));

    let totals = totals(&days);
    let top_topics = top_topics(&days);
    MetricsReport { range, window, restaurants, days, totals, top_topics }
}

#[allow(clippy::cast_precision_loss)]
fn totals(days: &[&DailyMetric]) -> MetricsTotals {
    if days.is_empty() {
        return MetricsTotals::default();
    }
    let n = days.len() as f64;
    MetricsTotals {
        conversations: days.iter().map(|m| u64::from(m.conversations)).sum(),
        reservations: days.iter().map(|m| u64::from(m.reservations)).sum(),
        mean_resolution_rate: days.iter().map(|m| m.resolution_rate).sum::<f64>() / n,
        mean_satisfaction: days.iter().map(|m| m.satisfaction).sum::<f64>() / n,
        mean_response_secs: days.iter().map(|m| f64::from(m.average_response_secs)).sum::<f64>() / n,
    }
}

fn top_topics(days: &[&DailyMetric]) -> Vec<TopicCount> {
    let mut out: Vec<TopicCount> = Vec::new();
    for entry in days.iter().flat_map(|m| &m.top_topics) {
        match out.iter().position(|t| t.topic == entry.topic) {
            Some(idx) => out[idx].count += entry.count,
            None => out.push(entry.clone()),
        }
    }
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}
