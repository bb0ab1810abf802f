//! Data models and view derivation for the restaurant agent console.
//!
//! This crate is UI-framework agnostic: it owns the entities, the sample
//! catalog, each page's filter state and the pure derivations (filtered lists,
//! empty states, badges, aggregates) so the HTTP layer only translates
//! query strings and sessions.

pub mod auth;
pub mod badge;
pub mod calendar;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod metrics;
pub mod model;
pub mod stats;

pub use auth::{LoginError, Role, Route, authenticate};
pub use calendar::CalendarDay;
pub use error::ParseError;
pub use filter::{Criteria, Filter, ListView, SearchQuery, derive, view};
pub use fixtures::sample_catalog;
pub use metrics::RestaurantSelection;
pub use model::Catalog;
