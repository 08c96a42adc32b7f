//! Filter factories.
//!
//! Each factory emits the standard operator set for one semantic field
//! kind, so every collection gets identical operator coverage without
//! hand-writing predicates.
//!
//! | Factory | Operators | Query types |
//! |---------|-----------|-------------|
//! | [`generic_filters`] | `eq`, `ne`, `lt`, `gt`, `lte`, `gte`, `in` | `T`, `[T]` for `in` |
//! | [`int_filters`] / [`float_filters`] | as generic | `Int` / `Float` |
//! | [`string_filters`] | generic + `like`, `ilike` | `String` |
//! | [`cost_filters`] | as generic, mapped through the denomination table | `Float` |
//! | [`array_filters`] | `has` | element tag |
//!
//! Factories are pure. Calling one twice yields equal declarations that
//! share no closures; uniqueness within a collection is checked by
//! [`validate_declarations`](crate::validate_declarations), not here.

use std::sync::Arc;

use crate::declaration::{FilterDeclaration, Mapper};
use crate::op::Op;
use crate::tag::PrimitiveTag;
use crate::value::{compare, equality, FieldValue, QueryValue};

/// The six ordering/equality operators plus `in` for a scalar field.
pub fn generic_filters(field: &str, tag: PrimitiveTag) -> Vec<FilterDeclaration> {
    let mut filters: Vec<FilterDeclaration> = Op::ORDERING
        .iter()
        .map(|&op| ordering_filter(field, op, tag))
        .collect();
    filters.push(in_filter(field, tag));
    filters
}

pub fn int_filters(field: &str) -> Vec<FilterDeclaration> {
    generic_filters(field, PrimitiveTag::Int)
}

pub fn float_filters(field: &str) -> Vec<FilterDeclaration> {
    generic_filters(field, PrimitiveTag::Float)
}

/// Generic `String` operators plus case-sensitive `like` and
/// case-insensitive `ilike` substring containment.
pub fn string_filters(field: &str) -> Vec<FilterDeclaration> {
    let mut filters = generic_filters(field, PrimitiveTag::String);
    filters.push(FilterDeclaration::new(
        field,
        Op::Like.as_str(),
        PrimitiveTag::String,
        |value, query| match (value, query) {
            (FieldValue::String(haystack), QueryValue::String(needle)) => {
                haystack.contains(needle.as_str())
            }
            _ => false,
        },
    ));
    filters.push(FilterDeclaration::new(
        field,
        Op::Ilike.as_str(),
        PrimitiveTag::String,
        |value, query| match (value, query) {
            (FieldValue::String(haystack), QueryValue::String(needle)) => haystack
                .to_lowercase()
                .contains(needle.to_lowercase().as_str()),
            _ => false,
        },
    ));
    filters
}

/// Operators for a structured currency field, filtered in gold pieces.
///
/// Every declaration shares one mapper that converts
/// [`FieldValue::Cost`] into [`FieldValue::Float`], so the advertised type
/// is `Float` (or `[Float]` for `in`) even though the stored field is not.
pub fn cost_filters(field: &str) -> Vec<FilterDeclaration> {
    let mapper: Mapper = Arc::new(cost_to_gold);
    generic_filters(field, PrimitiveTag::Float)
        .into_iter()
        .map(|declaration| declaration.with_shared_mapper(Arc::clone(&mapper)))
        .collect()
}

/// A single `has` operator: the field's sequence contains the query value.
///
/// Matching is element equality, not substring.
pub fn array_filters(field: &str, element: PrimitiveTag) -> Vec<FilterDeclaration> {
    vec![FilterDeclaration::new(
        field,
        Op::Has.as_str(),
        element,
        |value, query| match value {
            FieldValue::List(items) => items
                .iter()
                .any(|item| equality(item, query) == Some(true)),
            _ => false,
        },
    )]
}

fn ordering_filter(field: &str, op: Op, tag: PrimitiveTag) -> FilterDeclaration {
    FilterDeclaration::new(field, op.as_str(), tag, move |value, query| match op {
        Op::Eq => equality(value, query) == Some(true),
        Op::Ne => equality(value, query) == Some(false),
        _ => compare(value, query).is_some_and(|ordering| op.eval_ordering(ordering)),
    })
}

fn in_filter(field: &str, tag: PrimitiveTag) -> FilterDeclaration {
    FilterDeclaration::new(field, Op::In.as_str(), tag.list(), |value, query| {
        match query {
            QueryValue::List(candidates) => candidates
                .iter()
                .any(|candidate| equality(value, candidate) == Some(true)),
            _ => false,
        }
    })
}

fn cost_to_gold<'a>(value: FieldValue<'a>) -> FieldValue<'a> {
    match value {
        FieldValue::Cost(cost) => FieldValue::Float(cost.in_gold()),
        other => other,
    }
}
