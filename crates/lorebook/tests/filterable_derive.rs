//! Tests for the `#[derive(Filterable)]` macro.

use lorebook_filter::{compose_filters, Cost, Currency, FieldValue, Filterable, QueryValue, QueryValues};
use lorebook_macros::Filterable;

#[derive(Debug, Clone, Filterable)]
struct Relic {
    #[filter(String)]
    name: String,

    #[filter(Int)]
    attunement: u8,

    #[filter(Float)]
    weight: f32,

    #[filter(Boolean)]
    cursed: bool,

    #[filter(Cost)]
    cost: Cost,

    #[filter(Array(String))]
    tags: Vec<String>,

    #[filter(Array(Int), rename = "slots")]
    slot_ids: Vec<i32>,

    #[filter(skip)]
    #[allow(dead_code)]
    secret: String,

    #[allow(dead_code)]
    lore: String,
}

fn relic(name: &str, attunement: u8, cursed: bool, cost: Cost, tags: &[&str]) -> Relic {
    Relic {
        name: name.to_string(),
        attunement,
        weight: 1.5,
        cursed,
        cost,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        slot_ids: vec![1, 3],
        secret: String::new(),
        lore: String::new(),
    }
}

fn query(pairs: &[(&str, QueryValue)]) -> QueryValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn generates_field_constants() {
    assert_eq!(Relic::NAME, "name");
    assert_eq!(Relic::ATTUNEMENT, "attunement");
    assert_eq!(Relic::COST, "cost");
    assert_eq!(Relic::SLOTS, "slots");
}

#[test]
fn declarations_follow_field_kinds() {
    let keys: Vec<String> = Relic::filter_declarations()
        .iter()
        .map(|d| d.key())
        .collect();

    // String 9 + Int 7 + Float 7 + Boolean 7 + Cost 7 + two arrays
    assert_eq!(keys.len(), 9 + 7 + 7 + 7 + 7 + 1 + 1);
    assert!(keys.contains(&"name_ilike".to_string()));
    assert!(keys.contains(&"attunement_in".to_string()));
    assert!(keys.contains(&"cursed_eq".to_string()));
    assert!(keys.contains(&"cost_gte".to_string()));
    assert!(keys.contains(&"tags_has".to_string()));
    assert!(keys.contains(&"slots_has".to_string()));
    assert!(!keys.iter().any(|k| k.starts_with("secret") || k.starts_with("lore")));
}

#[test]
fn field_values_convert_to_tag_types() {
    let r = relic("Orb", 1, false, Cost::new(3.0, Currency::Pp), &["arcane"]);

    assert_eq!(r.field_value("name"), FieldValue::String("Orb"));
    assert_eq!(r.field_value("attunement"), FieldValue::Int(1));
    assert_eq!(r.field_value("weight"), FieldValue::Float(1.5));
    assert_eq!(r.field_value("cursed"), FieldValue::Bool(false));
    assert_eq!(r.field_value("cost"), FieldValue::Cost(Cost::new(3.0, Currency::Pp)));
    assert_eq!(
        r.field_value("slots"),
        FieldValue::List(vec![FieldValue::Int(1), FieldValue::Int(3)])
    );
    assert!(r.field_value("secret").is_none());
    assert!(r.field_value("lore").is_none());
    assert!(r.field_value("slot_ids").is_none());
}

#[test]
fn derived_declarations_drive_the_predicate() {
    let relics = vec![
        relic("Orb of Dragonkind", 1, false, Cost::new(500.0, Currency::Pp), &["arcane", "dragon"]),
        relic("Cursed Idol", 0, true, Cost::new(30.0, Currency::Gp), &["idol"]),
        relic("Lucky Coin", 0, false, Cost::new(5.0, Currency::Sp), &["luck"]),
    ];
    let predicate = compose_filters(Relic::filter_declarations());

    let cheap_and_clean = query(&[
        ("cost_lt", QueryValue::Float(100.0)),
        ("cursed_eq", QueryValue::Bool(false)),
    ]);
    let names: Vec<&str> = predicate
        .filter(&relics, &cheap_and_clean)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Lucky Coin"]);

    let dragons = query(&[("tags_has", "dragon".into()), ("name_ilike", "orb".into())]);
    assert_eq!(predicate.count(&relics, &dragons), 1);

    let slotted = query(&[("slots_has", QueryValue::Int(3))]);
    assert_eq!(predicate.count(&relics, &slotted), 3);
}

#[derive(Filterable)]
struct Plain {
    #[allow(dead_code)]
    text: String,
}

#[test]
fn no_annotations_means_no_filters() {
    assert!(Plain::filter_declarations().is_empty());
    let plain = Plain {
        text: "x".to_string(),
    };
    assert!(plain.field_value("text").is_none());
}
