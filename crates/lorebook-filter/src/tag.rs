//! Query-primitive tags.
//!
//! Tags describe the type a filter accepts in the declarative schema. They
//! are only ever rendered into schema text; runtime evaluation dispatches on
//! [`FieldValue`](crate::FieldValue) and [`QueryValue`](crate::QueryValue)
//! variants instead.

use std::fmt;

/// Scalar types usable in the query schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTag {
    Int,
    Float,
    String,
    Boolean,
}

impl PrimitiveTag {
    /// Every tag, in schema order.
    pub const ALL: [PrimitiveTag; 4] = [
        PrimitiveTag::Int,
        PrimitiveTag::Float,
        PrimitiveTag::String,
        PrimitiveTag::Boolean,
    ];

    /// Returns the schema name of this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveTag::Int => "Int",
            PrimitiveTag::Float => "Float",
            PrimitiveTag::String => "String",
            PrimitiveTag::Boolean => "Boolean",
        }
    }

    /// Wraps this tag as a homogeneous list type.
    pub fn list(self) -> QueryType {
        QueryType::List(self)
    }
}

impl fmt::Display for PrimitiveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared input type of a filter: a primitive tag or a list of one.
///
/// Lists never nest; `[[Int]]` is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    /// A single value, e.g. `Int`.
    Scalar(PrimitiveTag),
    /// A homogeneous list, e.g. `[Int]`.
    List(PrimitiveTag),
}

impl QueryType {
    /// Returns the underlying primitive tag.
    pub fn primitive(self) -> PrimitiveTag {
        match self {
            QueryType::Scalar(tag) | QueryType::List(tag) => tag,
        }
    }

    /// Returns `true` for the list-wrapped form.
    pub fn is_list(self) -> bool {
        matches!(self, QueryType::List(_))
    }
}

impl From<PrimitiveTag> for QueryType {
    fn from(tag: PrimitiveTag) -> Self {
        QueryType::Scalar(tag)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Scalar(tag) => write!(f, "{}", tag),
            QueryType::List(tag) => write!(f, "[{}]", tag),
        }
    }
}
