//! Predicate composition.
//!
//! [`compose_filters`] folds a collection's declaration list into a single
//! [`ComposedPredicate`] that decides whether a document satisfies a set of
//! [`QueryValues`].
//!
//! # Semantics
//!
//! ```text
//! match = no declarations configured
//!       ∨ ∀ (key, value) ∈ query values:
//!             key unknown  ∨  declaration[key].evaluate(doc[field], value)
//! ```
//!
//! - Keys are composite `field_operator` strings, looked up exactly.
//! - Distinct keys combine with AND. There is no OR and no nesting.
//! - An absent key places no constraint on its field.
//! - An unrecognized key is ignored, as if absent. It is logged at `debug`.
//!
//! The predicate holds no mutable state, so it can be shared across threads
//! and evaluated concurrently.

use std::collections::HashMap;

use tracing::debug;

use crate::declaration::FilterDeclaration;
use crate::traits::Filterable;
use crate::value::QueryValues;

/// A collection's filters compiled into one predicate.
#[derive(Debug, Clone, Default)]
pub struct ComposedPredicate {
    declarations: Vec<FilterDeclaration>,
    index: HashMap<String, usize>,
}

/// Compiles a declaration list into a [`ComposedPredicate`].
///
/// If two declarations share a key the first one wins; collections reject
/// that case earlier via [`validate_declarations`](crate::validate_declarations).
pub fn compose_filters(declarations: Vec<FilterDeclaration>) -> ComposedPredicate {
    let mut index = HashMap::with_capacity(declarations.len());
    for (position, declaration) in declarations.iter().enumerate() {
        index.entry(declaration.key()).or_insert(position);
    }
    ComposedPredicate {
        declarations,
        index,
    }
}

impl ComposedPredicate {
    /// Returns the declaration answering to `key`, if any.
    pub fn lookup(&self, key: &str) -> Option<&FilterDeclaration> {
        self.index.get(key).map(|&position| &self.declarations[position])
    }

    /// The declarations in their original order.
    pub fn declarations(&self) -> &[FilterDeclaration] {
        &self.declarations
    }

    /// Every key this predicate interprets, in declaration order.
    pub fn keys(&self) -> Vec<String> {
        self.declarations.iter().map(FilterDeclaration::key).collect()
    }

    /// Returns `true` if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Keys in `values` that no declaration answers to.
    ///
    /// These are ignored by [`matches`](Self::matches); callers that want
    /// to surface them to users can do so with this list.
    pub fn unknown_keys<'v>(&self, values: &'v QueryValues) -> Vec<&'v str> {
        values
            .keys()
            .filter(|key| !self.index.contains_key(key.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Tests one document against the query values.
    pub fn matches<D>(&self, document: &D, values: &QueryValues) -> bool
    where
        D: Filterable + ?Sized,
    {
        if self.declarations.is_empty() {
            return true;
        }

        values.iter().all(|(key, value)| match self.lookup(key) {
            Some(declaration) => {
                declaration.evaluate(document.field_value(declaration.field()), value)
            }
            None => {
                debug!(key = %key, "ignoring unrecognized filter key");
                true
            }
        })
    }

    /// Filters a slice, keeping entry order.
    pub fn filter<'a, D>(&self, documents: &'a [D], values: &QueryValues) -> Vec<&'a D>
    where
        D: Filterable,
    {
        let results: Vec<&'a D> = documents
            .iter()
            .filter(|document| self.matches(*document, values))
            .collect();
        debug!(
            scanned = documents.len(),
            matched = results.len(),
            conditions = values.len(),
            "filtered entries"
        );
        results
    }

    /// Counts matching documents.
    pub fn count<D>(&self, documents: &[D], values: &QueryValues) -> usize
    where
        D: Filterable,
    {
        documents
            .iter()
            .filter(|document| self.matches(*document, values))
            .count()
    }

    /// Finds the first matching document.
    pub fn find<'a, D>(&self, documents: &'a [D], values: &QueryValues) -> Option<&'a D>
    where
        D: Filterable,
    {
        documents
            .iter()
            .find(|document| self.matches(*document, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{array_filters, int_filters, string_filters};
    use crate::tag::PrimitiveTag;
    use crate::value::{FieldValue, QueryValue};

    #[derive(Debug, Clone, PartialEq)]
    struct Spell {
        name: String,
        level: i64,
        classes: Vec<String>,
    }

    impl Filterable for Spell {
        fn field_value(&self, field: &str) -> FieldValue<'_> {
            match field {
                "name" => FieldValue::String(&self.name),
                "level" => FieldValue::Int(self.level),
                "classes" => FieldValue::List(
                    self.classes.iter().map(|c| FieldValue::String(c)).collect(),
                ),
                _ => FieldValue::None,
            }
        }
    }

    fn spell(name: &str, level: i64, classes: &[&str]) -> Spell {
        Spell {
            name: name.to_string(),
            level,
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn sample_spells() -> Vec<Spell> {
        vec![
            spell("Fireball", 3, &["sorcerer", "wizard"]),
            spell("Ice Storm", 4, &["druid", "sorcerer", "wizard"]),
            spell("Cure Wounds", 1, &["bard", "cleric", "druid"]),
            spell("Fire Bolt", 0, &["sorcerer", "wizard"]),
        ]
    }

    fn spell_predicate() -> ComposedPredicate {
        let mut declarations = string_filters("name");
        declarations.extend(int_filters("level"));
        declarations.extend(array_filters("classes", PrimitiveTag::String));
        compose_filters(declarations)
    }

    fn values(pairs: &[(&str, QueryValue)]) -> QueryValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn empty_composition_matches_everything() {
        let predicate = compose_filters(Vec::new());
        let spells = sample_spells();
        let query = values(&[("level_eq", QueryValue::Int(99))]);

        assert!(predicate.is_empty());
        assert!(spells.iter().all(|s| predicate.matches(s, &query)));
        assert!(predicate.matches(&spells[0], &QueryValues::new()));
    }

    #[test]
    fn no_values_matches_everything() {
        let predicate = spell_predicate();
        let spells = sample_spells();
        assert_eq!(predicate.filter(&spells, &QueryValues::new()).len(), 4);
    }

    #[test]
    fn single_condition() {
        let predicate = spell_predicate();
        let query = values(&[("name_eq", "Fireball".into())]);

        assert!(predicate.matches(&spell("Fireball", 3, &[]), &query));
        assert!(!predicate.matches(&spell("Ice Storm", 4, &[]), &query));
    }

    #[test]
    fn distinct_keys_are_conjunctive() {
        let predicate = spell_predicate();
        let spells = sample_spells();
        let query = values(&[
            ("level_gte", QueryValue::Int(1)),
            ("classes_has", "wizard".into()),
        ]);

        let names: Vec<&str> = predicate
            .filter(&spells, &query)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Fireball", "Ice Storm"]);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let predicate = spell_predicate();
        let spells = sample_spells();
        let with_bogus = values(&[
            ("level_lte", QueryValue::Int(1)),
            ("bogus_eq", "x".into()),
        ]);
        let without = values(&[("level_lte", QueryValue::Int(1))]);

        assert_eq!(
            predicate.filter(&spells, &with_bogus),
            predicate.filter(&spells, &without)
        );
        assert_eq!(predicate.unknown_keys(&with_bogus), vec!["bogus_eq"]);
    }

    #[test]
    fn unknown_key_alone_matches_everything() {
        let predicate = spell_predicate();
        let spells = sample_spells();
        let query = values(&[("bogus_eq", "x".into())]);
        assert_eq!(predicate.count(&spells, &query), spells.len());
    }

    #[test]
    fn lookup_and_keys() {
        let predicate = spell_predicate();
        assert_eq!(predicate.lookup("level_in").map(|d| d.operator()), Some("in"));
        assert!(predicate.lookup("level").is_none());
        assert_eq!(predicate.keys().len(), 9 + 7 + 1);
        assert_eq!(predicate.keys()[0], "name_eq");
    }

    #[test]
    fn first_duplicate_wins() {
        let mut declarations = int_filters("level");
        declarations.push(crate::FilterDeclaration::new(
            "level",
            "eq",
            PrimitiveTag::Int,
            |_, _| false,
        ));
        let predicate = compose_filters(declarations);
        let query = values(&[("level_eq", QueryValue::Int(3))]);
        assert!(predicate.matches(&spell("Fireball", 3, &[]), &query));
    }

    #[test]
    fn find_and_count() {
        let predicate = spell_predicate();
        let spells = sample_spells();
        let query = values(&[("name_ilike", "fire".into())]);

        assert_eq!(predicate.count(&spells, &query), 2);
        assert_eq!(
            predicate.find(&spells, &query).map(|s| s.name.as_str()),
            Some("Fireball")
        );
    }

    #[test]
    fn evaluation_is_repeatable() {
        let predicate = spell_predicate();
        let spells = sample_spells();
        let query = values(&[("level_in", vec![0i64, 3].into())]);
        let first = predicate.filter(&spells, &query);
        let second = predicate.filter(&spells, &query);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
