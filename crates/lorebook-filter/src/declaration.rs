//! Filter declarations.
//!
//! A [`FilterDeclaration`] describes one filterable `(field, operator)` pair:
//! the predicate that decides it, the query type it advertises in the
//! schema, and an optional mapper applied to the raw field value first.
//!
//! Declarations are pure descriptions. Building one touches nothing
//! outside itself, and evaluating one never panics for a value of the
//! wrong shape: the predicate just returns `false`.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{FilterError, Result};
use crate::tag::QueryType;
use crate::value::{FieldValue, QueryValue};

/// Separator between field and operator in a filter key (`cost_gte`).
pub const KEY_SEPARATOR: char = '_';

/// Binary predicate over a (possibly mapped) field value and a query value.
pub type Predicate = Arc<dyn Fn(&FieldValue<'_>, &QueryValue) -> bool + Send + Sync>;

/// Projection applied to the raw field value before the predicate runs.
pub type Mapper = Arc<dyn for<'a> Fn(FieldValue<'a>) -> FieldValue<'a> + Send + Sync>;

/// Builds the composite `field_operator` key.
pub fn filter_key(field: &str, operator: &str) -> String {
    let mut key = String::with_capacity(field.len() + operator.len() + 1);
    key.push_str(field);
    key.push(KEY_SEPARATOR);
    key.push_str(operator);
    key
}

/// One filterable `(field, operator)` pair.
///
/// # Example
///
/// ```
/// use lorebook_filter::{FieldValue, FilterDeclaration, PrimitiveTag, QueryValue};
///
/// let even = FilterDeclaration::new("level", "even", PrimitiveTag::Boolean, |value, query| {
///     match (value, query) {
///         (FieldValue::Int(n), QueryValue::Bool(want)) => (n % 2 == 0) == *want,
///         _ => false,
///     }
/// });
///
/// assert_eq!(even.key(), "level_even");
/// assert!(even.evaluate(FieldValue::Int(4), &QueryValue::Bool(true)));
/// ```
#[derive(Clone)]
pub struct FilterDeclaration {
    field: String,
    operator: String,
    query_type: QueryType,
    predicate: Predicate,
    mapper: Option<Mapper>,
}

impl FilterDeclaration {
    /// Creates a declaration without a mapper.
    pub fn new<P>(
        field: impl Into<String>,
        operator: impl Into<String>,
        query_type: impl Into<QueryType>,
        predicate: P,
    ) -> Self
    where
        P: Fn(&FieldValue<'_>, &QueryValue) -> bool + Send + Sync + 'static,
    {
        FilterDeclaration {
            field: field.into(),
            operator: operator.into(),
            query_type: query_type.into(),
            predicate: Arc::new(predicate),
            mapper: None,
        }
    }

    /// Attaches a mapper applied to the raw field value before the predicate.
    pub fn with_mapper<M>(self, mapper: M) -> Self
    where
        M: for<'a> Fn(FieldValue<'a>) -> FieldValue<'a> + Send + Sync + 'static,
    {
        self.with_shared_mapper(Arc::new(mapper))
    }

    /// Attaches a mapper shared with other declarations.
    pub fn with_shared_mapper(mut self, mapper: Mapper) -> Self {
        self.mapper = Some(mapper);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// The type advertised in schema text. Never consulted at runtime.
    pub fn query_type(&self) -> QueryType {
        self.query_type
    }

    pub fn has_mapper(&self) -> bool {
        self.mapper.is_some()
    }

    /// The `field_operator` key this declaration answers to.
    pub fn key(&self) -> String {
        filter_key(&self.field, &self.operator)
    }

    /// Maps the raw field value (if a mapper is set) and runs the predicate.
    pub fn evaluate(&self, raw: FieldValue<'_>, query: &QueryValue) -> bool {
        let mapped = match &self.mapper {
            Some(mapper) => mapper(raw),
            None => raw,
        };
        (self.predicate)(&mapped, query)
    }
}

impl fmt::Debug for FilterDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterDeclaration")
            .field("field", &self.field)
            .field("operator", &self.operator)
            .field("query_type", &self.query_type)
            .field("mapped", &self.mapper.is_some())
            .finish()
    }
}

/// Declarations are equal when they describe the same query surface:
/// same field, operator, query type and mapper presence. Closures are
/// not compared.
impl PartialEq for FilterDeclaration {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
            && self.operator == other.operator
            && self.query_type == other.query_type
            && self.mapper.is_some() == other.mapper.is_some()
    }
}

/// Checks a collection's declaration list for ambiguity.
///
/// Fails on the first empty name or the first repeated `field_operator` key.
pub fn validate_declarations(declarations: &[FilterDeclaration]) -> Result<()> {
    let mut seen = HashSet::with_capacity(declarations.len());
    for declaration in declarations {
        if declaration.field.is_empty() {
            return Err(FilterError::EmptyName { part: "field" });
        }
        if declaration.operator.is_empty() {
            return Err(FilterError::EmptyName { part: "operator" });
        }
        let key = declaration.key();
        if !seen.insert(key.clone()) {
            return Err(FilterError::DuplicateFilter {
                key,
                field: declaration.field.clone(),
                operator: declaration.operator.clone(),
            });
        }
    }
    Ok(())
}
