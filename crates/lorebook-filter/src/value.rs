//! Runtime values for filter evaluation.
//!
//! Two sides meet in every comparison:
//!
//! - [`FieldValue`] is borrowed from a document by its
//!   [`Filterable`](crate::Filterable) accessor.
//! - [`QueryValue`] is owned, supplied per request by the resolution layer.
//!
//! Equality is explicit per kind: numbers compare numerically (an `Int` and
//! a `Float` meet as `f64`), strings byte-wise, booleans by value, and lists
//! structurally. Values of different kinds are not comparable at all.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cost::Cost;

/// A field value borrowed from a document.
///
/// # Example
///
/// ```
/// use lorebook_filter::FieldValue;
///
/// struct Spell {
///     name: String,
///     level: u8,
/// }
///
/// fn accessor<'a>(spell: &'a Spell, field: &str) -> FieldValue<'a> {
///     match field {
///         "name" => FieldValue::String(&spell.name),
///         "level" => FieldValue::Int(i64::from(spell.level)),
///         _ => FieldValue::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Int(i64),
    Float(f64),
    String(&'a str),
    Bool(bool),
    /// Structured currency amount; filters map it to a `Float` first.
    Cost(Cost),
    List(Vec<FieldValue<'a>>),
    /// Field absent on this document. Never matches anything.
    None,
}

impl<'a> FieldValue<'a> {
    pub fn is_none(&self) -> bool {
        matches!(self, FieldValue::None)
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts a numeric value. `Cost` is not numeric until mapped.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            FieldValue::Int(n) => Some(Number::Int(*n)),
            FieldValue::Float(n) => Some(Number::Float(*n)),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue<'a>]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A query value supplied by a caller.
///
/// Deserializes from plain JSON scalars and arrays. Objects and `null` are
/// rejected at deserialization time, so malformed input never reaches a
/// predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<QueryValue>),
}

impl QueryValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            QueryValue::Int(n) => Some(Number::Int(*n)),
            QueryValue::Float(n) => Some(Number::Float(*n)),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[QueryValue]> {
        match self {
            QueryValue::List(values) => Some(values),
            _ => None,
        }
    }
}

/// Query values for one request, keyed by `field_operator`.
pub type QueryValues = BTreeMap<String, QueryValue>;

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl From<i32> for QueryValue {
    fn from(n: i32) -> Self {
        QueryValue::Int(i64::from(n))
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Int(n)
    }
}

impl From<u8> for QueryValue {
    fn from(n: u8) -> Self {
        QueryValue::Int(i64::from(n))
    }
}

impl From<f64> for QueryValue {
    fn from(n: f64) -> Self {
        QueryValue::Float(n)
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::String(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::String(s)
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        QueryValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Numeric value on either side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(n) => n,
        }
    }

    /// Compares two numbers, handling mixed kinds.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

/// Orders a field value against a query value.
///
/// Returns `None` when the two are not comparable (different kinds, lists,
/// unmapped costs, absent fields, NaN).
pub fn compare(field: &FieldValue<'_>, query: &QueryValue) -> Option<Ordering> {
    match (field, query) {
        (FieldValue::String(a), QueryValue::String(b)) => Some((*a).cmp(b.as_str())),
        (FieldValue::Bool(a), QueryValue::Bool(b)) => Some(a.cmp(b)),
        _ => field.as_number()?.compare(query.as_number()?),
    }
}

/// Tests a field value against a query value for equality.
///
/// `Some(true)` / `Some(false)` when comparable, `None` otherwise. Lists
/// compare element-wise and are only comparable to lists.
pub fn equality(field: &FieldValue<'_>, query: &QueryValue) -> Option<bool> {
    match (field, query) {
        (FieldValue::List(items), QueryValue::List(values)) => {
            if items.len() != values.len() {
                return Some(false);
            }
            for (item, value) in items.iter().zip(values) {
                if !equality(item, value)? {
                    return Some(false);
                }
            }
            Some(true)
        }
        (FieldValue::List(_), _) | (_, QueryValue::List(_)) => None,
        _ => compare(field, query).map(|ordering| ordering == Ordering::Equal),
    }
}
