//! Equipment: weapons, armor, tools, gear, packs and stacks.
//!
//! One `Item` collection holds every variant. Common fields live on
//! [`Item`]; the variant payload sits in [`ItemKind`], tagged by `type`.

use lorebook_filter::{
    array_filters, cost_filters, float_filters, int_filters, string_filters, Cost, FieldValue,
    FilterDeclaration, Filterable, PrimitiveTag,
};
use serde::{Deserialize, Serialize};

use super::Entry;

fn default_rarity() -> String {
    "common".to_string()
}

/// A piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub cost: Cost,
    #[serde(default)]
    pub weight: f64,
    #[serde(default = "default_rarity")]
    pub rarity: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub kind: ItemKind,
}

/// Variant payload of an [`Item`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Weapon {
        damage: String,
        #[serde(default)]
        properties: Vec<String>,
    },
    Armor {
        ac: u8,
    },
    Tool,
    Gear,
    Pack {
        #[serde(default)]
        contents: Vec<String>,
    },
    Stack {
        quantity: u32,
    },
}

impl ItemKind {
    /// The `type` discriminator, also the value matched by `kind_*` filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Weapon { .. } => "weapon",
            ItemKind::Armor { .. } => "armor",
            ItemKind::Tool => "tool",
            ItemKind::Gear => "gear",
            ItemKind::Pack { .. } => "pack",
            ItemKind::Stack { .. } => "stack",
        }
    }

    /// Concrete schema type.
    pub fn type_name(&self) -> &'static str {
        match self {
            ItemKind::Weapon { .. } => "Weapon",
            ItemKind::Armor { .. } => "Armor",
            ItemKind::Tool => "Tool",
            ItemKind::Gear => "Gear",
            ItemKind::Pack { .. } => "Pack",
            ItemKind::Stack { .. } => "Stack",
        }
    }
}

impl Item {
    pub const TYPE_SCHEMA: &'static str = "\
type Money {
  amount: Float!
  currency: String!
}

interface Item {
  id: String!
  name: String!
  cost: Money!
  weight: Float!
  rarity: String!
  tags: [String!]!
}

type Weapon implements Item {
  id: String!
  name: String!
  cost: Money!
  weight: Float!
  rarity: String!
  tags: [String!]!
  damage: String!
  properties: [String!]!
}

type Armor implements Item {
  id: String!
  name: String!
  cost: Money!
  weight: Float!
  rarity: String!
  tags: [String!]!
  ac: Int!
}

type Tool implements Item {
  id: String!
  name: String!
  cost: Money!
  weight: Float!
  rarity: String!
  tags: [String!]!
}

type Gear implements Item {
  id: String!
  name: String!
  cost: Money!
  weight: Float!
  rarity: String!
  tags: [String!]!
}

type Pack implements Item {
  id: String!
  name: String!
  cost: Money!
  weight: Float!
  rarity: String!
  tags: [String!]!
  contents: [String!]!
}

type Stack implements Item {
  id: String!
  name: String!
  cost: Money!
  weight: Float!
  rarity: String!
  tags: [String!]!
  quantity: Int!
}
";

    /// Armor class, for armor only.
    pub fn ac(&self) -> Option<u8> {
        match self.kind {
            ItemKind::Armor { ac } => Some(ac),
            _ => None,
        }
    }
}

impl Filterable for Item {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::String(&self.name),
            "cost" => FieldValue::Cost(self.cost),
            "weight" => FieldValue::Float(self.weight),
            "rarity" => FieldValue::String(&self.rarity),
            "kind" => FieldValue::String(self.kind.as_str()),
            "tags" => FieldValue::List(self.tags.iter().map(|t| FieldValue::String(t)).collect()),
            "ac" => self
                .ac()
                .map_or(FieldValue::None, |ac| FieldValue::Int(i64::from(ac))),
            _ => FieldValue::None,
        }
    }

    fn filter_declarations() -> Vec<FilterDeclaration> {
        let mut filters = string_filters("name");
        filters.extend(cost_filters("cost"));
        filters.extend(float_filters("weight"));
        filters.extend(string_filters("rarity"));
        filters.extend(string_filters("kind"));
        filters.extend(array_filters("tags", PrimitiveTag::String));
        filters.extend(int_filters("ac"));
        filters
    }
}

impl Entry for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorebook_filter::{compose_filters, Currency, QueryValue, QueryValues};

    fn item(json: serde_json::Value) -> Item {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn deserializes_each_variant() {
        let shield = item(serde_json::json!({
            "id": "shield", "name": "Shield", "type": "armor", "ac": 2,
            "cost": {"amount": 10, "currency": "gp"}, "weight": 6
        }));
        assert_eq!(shield.kind, ItemKind::Armor { ac: 2 });
        assert_eq!(shield.rarity, "common");
        assert_eq!(shield.type_name(), "Armor");

        let crowbar = item(serde_json::json!({
            "id": "crowbar", "name": "Crowbar", "type": "tool",
            "cost": {"amount": 2, "currency": "gp"}
        }));
        assert_eq!(crowbar.kind, ItemKind::Tool);
        assert_eq!(crowbar.type_name(), "Tool");
    }

    #[test]
    fn serializes_discriminator_inline() {
        let arrows = Item {
            id: "arrows".into(),
            name: "Arrows".into(),
            cost: Cost::new(1.0, Currency::Gp),
            weight: 1.0,
            rarity: "common".into(),
            tags: vec!["ammunition".into()],
            kind: ItemKind::Stack { quantity: 20 },
        };
        let value = serde_json::to_value(&arrows).unwrap();
        assert_eq!(value["type"], "stack");
        assert_eq!(value["quantity"], 20);
        assert_eq!(value["cost"]["currency"], "gp");
    }

    #[test]
    fn ac_is_absent_on_non_armor() {
        let sword = item(serde_json::json!({
            "id": "longsword", "name": "Longsword", "type": "weapon",
            "damage": "1d8 slashing", "cost": {"amount": 15, "currency": "gp"}
        }));
        assert!(sword.field_value("ac").is_none());

        let predicate = compose_filters(Item::filter_declarations());
        let mut query = QueryValues::new();
        query.insert("ac_ne".into(), QueryValue::Int(99));
        assert!(!predicate.matches(&sword, &query));
    }

    #[test]
    fn kind_filter_matches_discriminator() {
        let rope = item(serde_json::json!({
            "id": "rope", "name": "Hempen Rope", "type": "gear",
            "cost": {"amount": 1, "currency": "gp"}, "tags": ["utility"]
        }));
        let predicate = compose_filters(Item::filter_declarations());
        let mut query = QueryValues::new();
        query.insert("kind_eq".into(), "gear".into());
        query.insert("tags_has".into(), "utility".into());
        assert!(predicate.matches(&rope, &query));
    }
}
