//! Error types for the filter crate.

use thiserror::Error;

/// Errors raised while validating a collection's filter declarations.
///
/// Evaluation itself never fails: a value of the wrong shape simply does
/// not match. Only declaration sets that would make the query surface
/// ambiguous are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Two declarations produce the same `field_operator` key.
    #[error("duplicate filter '{key}' (field '{field}', operator '{operator}')")]
    DuplicateFilter {
        key: String,
        field: String,
        operator: String,
    },

    /// A declaration was built with an empty field or operator name.
    #[error("filter declaration has an empty {part} name")]
    EmptyName { part: &'static str },
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
