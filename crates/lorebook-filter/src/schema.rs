//! Schema projection.
//!
//! Derives a collection's schema fragment purely from its filter
//! declarations, so the advertised query surface and the keys the
//! [`ComposedPredicate`](crate::ComposedPredicate) interprets come from one
//! source.
//!
//! For a `spells` collection of `Spell` documents:
//!
//! ```text
//! input SpellFilters {
//!   level_eq: Int
//!   ...
//! }
//!
//! extend type Query {
//!   spells(skipExpressionEvaluation: Boolean, filter: SpellFilters): [Spell!]!
//!   spell(id: String!, skipExpressionEvaluation: Boolean): Spell
//! }
//! ```
//!
//! With no declarations the input type and the `filter` argument are both
//! left out.

use crate::declaration::FilterDeclaration;

/// Name of the generated input type for a document kind.
pub fn input_type_name(type_name: &str) -> String {
    format!("{type_name}Filters")
}

/// Name of the fetch-one query field: the type name with a lower-case
/// first letter (`MagicItem` → `magicItem`).
pub fn fetch_one_field(type_name: &str) -> String {
    let mut chars = type_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One `field_operator: QueryType` line per declaration.
pub fn input_fields(declarations: &[FilterDeclaration]) -> Vec<String> {
    declarations
        .iter()
        .map(|declaration| format!("{}: {}", declaration.key(), declaration.query_type()))
        .collect()
}

/// Projects the schema fragment for one collection.
///
/// `collection_id` names the fetch-many field, `type_name` the document
/// kind returned by both fields.
pub fn project_schema(
    collection_id: &str,
    type_name: &str,
    declarations: &[FilterDeclaration],
) -> String {
    let mut out = String::new();

    let filter_arg = if declarations.is_empty() {
        String::new()
    } else {
        let input = input_type_name(type_name);
        out.push_str(&format!("input {input} {{\n"));
        for line in input_fields(declarations) {
            out.push_str("  ");
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("}\n\n");
        format!(", filter: {input}")
    };

    out.push_str("extend type Query {\n");
    out.push_str(&format!(
        "  {collection_id}(skipExpressionEvaluation: Boolean{filter_arg}): [{type_name}!]!\n"
    ));
    out.push_str(&format!(
        "  {}(id: String!, skipExpressionEvaluation: Boolean): {type_name}\n",
        fetch_one_field(type_name)
    ));
    out.push_str("}\n");
    out
}
