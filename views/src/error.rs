//! Parse failures for query-string and fixture values.

/// Error returned when a raw string does not map onto a console value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value is not one of the closed vocabulary's spellings.
    #[error("unknown {kind}: {value:?}")]
    UnknownValue { kind: &'static str, value: String },
    /// The value is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    /// A restaurant selection resolved to no restaurants.
    #[error("no restaurant selected")]
    EmptySelection,
}
