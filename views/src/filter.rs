//! Filter-and-search view derivation.
//!
//! DESIGN
//! ======
//! Each page owns a flat criteria record (see `criteria`) whose fields are
//! independent: a free-text [`SearchQuery`] plus any number of categorical
//! [`Filter`]s. Deriving a view is a stable, pure pass over the source slice;
//! it never fabricates or reorders records unless the page's criteria declare
//! an explicit order.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ParseError;

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Reserved sentinel meaning "no constraint" for a categorical filter.
pub const ALL: &str = "all";

// =============================================================================
// CATEGORICAL FILTER
// =============================================================================

/// A categorical constraint: either unconstrained or an exact value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Filter<T> {
    /// True when `value` satisfies this constraint.
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T> Filter<T> {
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub fn as_only(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl<T: FromStr<Err = ParseError>> Filter<T> {
    /// Parse a query-string value. Absent, empty and `all` are unconstrained.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownValue`] when the value is outside the
    /// closed vocabulary of `T`.
    pub fn parse(raw: Option<&str>) -> Result<Self, ParseError> {
        match raw.map(str::trim) {
            None | Some("" | ALL) => Ok(Self::All),
            Some(value) => value.parse().map(Self::Only),
        }
    }
}

impl Filter<String> {
    /// Open-vocabulary filter (category names, restaurant ids).
    #[must_use]
    pub fn text(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("" | ALL) => Self::All,
            Some(value) => Self::Only(value.to_owned()),
        }
    }

    /// Compare against a borrowed field without allocating.
    #[must_use]
    pub fn admits_str(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T: Serialize> Serialize for Filter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str(ALL),
            Self::Only(value) => value.serialize(serializer),
        }
    }
}

// =============================================================================
// FREE-TEXT QUERY
// =============================================================================

/// Case-insensitive substring query. The empty query matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self { raw: raw.to_owned(), needle: raw.to_lowercase() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn matches(&self, field: &str) -> bool {
        self.needle.is_empty() || field.to_lowercase().contains(&self.needle)
    }

    /// Case-sensitive match against the query as typed (phone numbers).
    #[must_use]
    pub fn matches_exact(&self, field: &str) -> bool {
        field.contains(&self.raw)
    }

    #[must_use]
    pub fn matches_any<'f>(&self, fields: impl IntoIterator<Item = &'f str>) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        fields.into_iter().any(|field| self.matches(field))
    }
}

impl From<Option<&str>> for SearchQuery {
    fn from(raw: Option<&str>) -> Self {
        Self::new(raw.unwrap_or_default())
    }
}

impl Serialize for SearchQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

// =============================================================================
// CRITERIA + DERIVATION
// =============================================================================

/// A page's filter state over records of type `T`.
pub trait Criteria<T> {
    /// Shown instead of an empty list when nothing matches.
    const EMPTY_MESSAGE: &'static str;

    /// Logical AND of every predicate this page applies.
    fn matches(&self, record: &T) -> bool;

    /// Explicit page ordering. The default keeps source order.
    fn order(&self, _rows: &mut Vec<&T>) {}
}

/// Stable filter: matching records in their original relative order.
pub fn derive<'a, T: 'a, C: Criteria<T>>(records: impl IntoIterator<Item = &'a T>, criteria: &C) -> Vec<&'a T> {
    let mut rows: Vec<&'a T> = records.into_iter().filter(|r| criteria.matches(r)).collect();
    criteria.order(&mut rows);
    rows
}

/// Derive and wrap in a [`ListView`] carrying the page's empty state.
pub fn view<'a, T: 'a, C: Criteria<T>>(records: impl IntoIterator<Item = &'a T>, criteria: &C) -> ListView<'a, T> {
    ListView::new(derive(records, criteria), C::EMPTY_MESSAGE)
}

/// A derived list, or the explicit "no results" affordance.
#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListView<'a, T> {
    Rows { count: usize, items: Vec<&'a T> },
    Empty { message: &'static str },
}

impl<'a, T> ListView<'a, T> {
    #[must_use]
    pub fn new(items: Vec<&'a T>, empty_message: &'static str) -> Self {
        if items.is_empty() {
            Self::Empty { message: empty_message }
        } else {
            Self::Rows { count: items.len(), items }
        }
    }

    #[must_use]
    pub fn items(&self) -> &[&'a T] {
        match self {
            Self::Rows { items, .. } => items,
            Self::Empty { .. } => &[],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// The empty-state message, when nothing matched.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            Self::Rows { .. } => None,
            Self::Empty { message } => Some(*message),
        }
    }
}
