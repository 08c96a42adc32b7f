use lorebook_macros::Filterable;
use serde::{Deserialize, Serialize};

use super::Entry;

/// A spell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Filterable)]
pub struct Spell {
    pub id: String,

    #[filter(String)]
    pub name: String,

    #[filter(Int)]
    pub level: u8,

    #[filter(String)]
    pub school: String,

    #[filter(Array(String))]
    #[serde(default)]
    pub classes: Vec<String>,

    #[filter(Boolean)]
    #[serde(default)]
    pub ritual: bool,

    #[filter(Boolean)]
    #[serde(default)]
    pub concentration: bool,

    #[serde(default)]
    pub range: String,

    #[serde(default)]
    pub description: String,
}

impl Spell {
    pub const TYPE_SCHEMA: &'static str = "\
type Spell {
  id: String!
  name: String!
  level: Int!
  school: String!
  classes: [String!]!
  ritual: Boolean!
  concentration: Boolean!
  range: String!
  description: String!
}
";
}

impl Entry for Spell {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "Spell"
    }
}
