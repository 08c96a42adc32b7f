//! End-to-end checks of the filter contract through the public API.

use std::collections::HashSet;

use lorebook_filter::{
    array_filters, compose_filters, cost_filters, generic_filters, int_filters, project_schema,
    string_filters, validate_declarations, Cost, Currency, FieldValue, FilterDeclaration,
    FilterError, Filterable, PrimitiveTag, QueryType, QueryValue, QueryValues,
};

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Gear {
    name: String,
    cost: Cost,
    tags: Vec<String>,
}

impl Filterable for Gear {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::String(&self.name),
            "cost" => FieldValue::Cost(self.cost),
            "tags" => FieldValue::List(self.tags.iter().map(|t| FieldValue::String(t)).collect()),
            _ => FieldValue::None,
        }
    }

    fn filter_declarations() -> Vec<FilterDeclaration> {
        let mut filters = string_filters("name");
        filters.extend(cost_filters("cost"));
        filters.extend(array_filters("tags", PrimitiveTag::String));
        filters
    }
}

fn gear(name: &str, amount: f64, currency: Currency, tags: &[&str]) -> Gear {
    Gear {
        name: name.to_string(),
        cost: Cost::new(amount, currency),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn query(pairs: &[(&str, QueryValue)]) -> QueryValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// ============================================================================
// Factories
// ============================================================================

#[test]
fn generic_filters_always_seven_distinct_operators() {
    for tag in PrimitiveTag::ALL {
        let filters = generic_filters("field", tag);
        let operators: HashSet<&str> = filters.iter().map(|f| f.operator()).collect();
        assert_eq!(filters.len(), 7);
        assert_eq!(
            operators,
            ["eq", "ne", "lt", "gt", "lte", "gte", "in"]
                .into_iter()
                .collect::<HashSet<&str>>()
        );
        for filter in &filters {
            let expected = if filter.operator() == "in" {
                QueryType::List(tag)
            } else {
                QueryType::Scalar(tag)
            };
            assert_eq!(filter.query_type(), expected);
        }
    }
}

#[test]
fn string_filters_is_generic_plus_like_and_ilike() {
    let generic = generic_filters("name", PrimitiveTag::String);
    let string = string_filters("name");

    for declaration in &generic {
        assert!(string.contains(declaration));
    }
    let extra: Vec<&str> = string
        .iter()
        .filter(|d| !generic.contains(d))
        .map(|d| d.operator())
        .collect();
    assert_eq!(extra, vec!["like", "ilike"]);
}

#[test]
fn int_filters_match_generic_int() {
    assert_eq!(int_filters("level"), generic_filters("level", PrimitiveTag::Int));
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn cost_gte_uses_denomination_table() {
    let predicate = compose_filters(Gear::filter_declarations());
    let values = query(&[("cost_gte", QueryValue::Float(3.0))]);

    assert!(predicate.matches(&gear("Lantern", 5.0, Currency::Gp, &[]), &values));
    assert!(!predicate.matches(&gear("Chalk", 5.0, Currency::Cp, &[]), &values));
}

#[test]
fn cost_in_compares_gold_values() {
    let predicate = compose_filters(Gear::filter_declarations());
    let values = query(&[("cost_in", vec![0.5f64, 10.0].into())]);

    assert!(predicate.matches(&gear("Ingot", 1.0, Currency::Ep, &[]), &values));
    assert!(predicate.matches(&gear("Bar", 1.0, Currency::Pp, &[]), &values));
    assert!(!predicate.matches(&gear("Coin", 1.0, Currency::Gp, &[]), &values));
}

#[test]
fn empty_declarations_accept_anything() {
    let predicate = compose_filters(Vec::new());
    let values = query(&[
        ("name_eq", "nothing".into()),
        ("cost_lt", QueryValue::Int(-1)),
    ]);
    assert!(predicate.matches(&gear("Rope", 1.0, Currency::Gp, &[]), &values));
}

#[test]
fn name_eq_selects_exact_name() {
    let predicate = compose_filters(string_filters("name"));
    let values = query(&[("name_eq", "Fireball".into())]);

    assert!(predicate.matches(&gear("Fireball", 0.0, Currency::Gp, &[]), &values));
    assert!(!predicate.matches(&gear("Ice Storm", 0.0, Currency::Gp, &[]), &values));
}

#[test]
fn unknown_key_acts_as_absent() {
    let predicate = compose_filters(Gear::filter_declarations());
    let items = vec![
        gear("Torch", 1.0, Currency::Cp, &["light"]),
        gear("Lantern", 5.0, Currency::Gp, &["light"]),
    ];

    let bogus_only = query(&[("bogus_eq", "x".into())]);
    assert_eq!(predicate.filter(&items, &bogus_only).len(), items.len());

    let constrained = query(&[("cost_gte", QueryValue::Int(1))]);
    let mut constrained_with_bogus = constrained.clone();
    constrained_with_bogus.insert("bogus_eq".to_string(), "x".into());
    assert_eq!(
        predicate.filter(&items, &constrained),
        predicate.filter(&items, &constrained_with_bogus)
    );
}

#[test]
fn tags_has_membership() {
    let predicate = compose_filters(array_filters("tags", PrimitiveTag::String));
    let item = gear("Alchemist's Fire", 50.0, Currency::Gp, &["fire", "ranged"]);

    assert!(predicate.matches(&item, &query(&[("tags_has", "fire".into())])));
    assert!(!predicate.matches(&item, &query(&[("tags_has", "cold".into())])));
}

#[test]
fn wrong_query_shape_never_matches() {
    let predicate = compose_filters(Gear::filter_declarations());
    let item = gear("Rope", 1.0, Currency::Gp, &["utility"]);

    assert!(!predicate.matches(&item, &query(&[("cost_gte", "cheap".into())])));
    assert!(!predicate.matches(&item, &query(&[("name_in", "Rope".into())])));
    assert!(!predicate.matches(&item, &query(&[("tags_has", vec!["utility"].into())])));
}

// ============================================================================
// Schema projection
// ============================================================================

#[test]
fn schema_lists_every_declaration_once() {
    let declarations = Gear::filter_declarations();
    let schema = project_schema("gear", "Gear", &declarations);
    let predicate = compose_filters(declarations);

    let input_lines: Vec<&str> = schema
        .lines()
        .skip_while(|line| !line.starts_with("input GearFilters"))
        .skip(1)
        .take_while(|line| *line != "}")
        .collect();
    assert_eq!(input_lines.len(), predicate.declarations().len());

    let advertised: Vec<String> = input_lines
        .iter()
        .map(|line| line.trim().split(':').next().unwrap_or_default().to_string())
        .collect();
    assert_eq!(advertised, predicate.keys());
}

#[test]
fn schema_without_filters_has_no_input() {
    let schema = project_schema("rules", "Rule", &[]);
    assert!(!schema.contains("RuleFilters"));
    assert!(schema.contains("rules(skipExpressionEvaluation: Boolean): [Rule!]!"));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn calling_a_factory_twice_is_a_duplicate() {
    let mut declarations = int_filters("level");
    declarations.extend(int_filters("level"));
    assert!(matches!(
        validate_declarations(&declarations),
        Err(FilterError::DuplicateFilter { key, .. }) if key == "level_eq"
    ));
}
