//! Query-string parameters shared by the list endpoints.
//!
//! Each endpoint reads only the parameters its page understands; the rest are
//! ignored.

use std::str::FromStr;

use serde::Deserialize;
use views::model::MetricsRange;
use views::{CalendarDay, Filter, ParseError, SearchQuery};

use crate::config::parse_bool;

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub channel: Option<String>,
    pub role: Option<String>,
    pub category: Option<String>,
    pub restaurant: Option<String>,
    pub date: Option<String>,
    pub show_unavailable: Option<String>,
    /// Comma-separated restaurant ids compared on the metrics page.
    pub restaurants: Option<String>,
    /// Restaurant id flipped in or out of `restaurants`.
    pub toggle: Option<String>,
    pub range: Option<String>,
}

type Parsed<T> = Result<Filter<T>, ParseError>;

impl ViewQuery {
    #[must_use]
    pub fn search(&self) -> SearchQuery {
        SearchQuery::from(self.q.as_deref())
    }

    /// # Errors
    ///
    /// Returns [`ParseError::UnknownValue`] for a value outside `T`'s vocabulary.
    pub fn status<T: FromStr<Err = ParseError>>(&self) -> Parsed<T> {
        Filter::parse(self.status.as_deref())
    }

    /// # Errors
    ///
    /// Returns [`ParseError::UnknownValue`] for a value outside `T`'s vocabulary.
    pub fn channel<T: FromStr<Err = ParseError>>(&self) -> Parsed<T> {
        Filter::parse(self.channel.as_deref())
    }

    /// # Errors
    ///
    /// Returns [`ParseError::UnknownValue`] for a value outside `T`'s vocabulary.
    pub fn role<T: FromStr<Err = ParseError>>(&self) -> Parsed<T> {
        Filter::parse(self.role.as_deref())
    }

    #[must_use]
    pub fn category(&self) -> Filter<String> {
        Filter::text(self.category.as_deref())
    }

    #[must_use]
    pub fn restaurant(&self) -> Filter<String> {
        Filter::text(self.restaurant.as_deref())
    }

    /// Whether unavailable menu items are listed; false when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownValue`] when the flag is not a boolean
    /// spelling (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`).
    pub fn show_unavailable(&self) -> Result<bool, ParseError> {
        match self.show_unavailable.as_deref().map(str::trim) {
            None | Some("") => Ok(false),
            Some(raw) => parse_bool(raw)
                .ok_or_else(|| ParseError::UnknownValue { kind: "show_unavailable flag", value: raw.to_owned() }),
        }
    }

    /// Selected day; today (UTC) when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDate`] unless the value is `YYYY-MM-DD`.
    pub fn date(&self) -> Result<CalendarDay, ParseError> {
        Ok(self.explicit_date()?.unwrap_or_else(CalendarDay::today))
    }

    /// Selected day, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDate`] unless the value is `YYYY-MM-DD`.
    pub fn explicit_date(&self) -> Result<Option<CalendarDay>, ParseError> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }

    /// Metrics window; a week when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownValue`] for an unknown range name.
    pub fn range(&self) -> Result<MetricsRange, ParseError> {
        match self.range.as_deref().map(str::trim) {
            None | Some("") => Ok(MetricsRange::Week),
            Some(raw) => raw.parse(),
        }
    }

    /// Restaurant id to toggle, if one was named.
    #[must_use]
    pub fn toggle(&self) -> Option<&str> {
        self.toggle.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
