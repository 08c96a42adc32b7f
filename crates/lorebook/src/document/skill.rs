use lorebook_macros::Filterable;
use serde::{Deserialize, Serialize};

use super::Entry;

/// A skill and the ability score it keys off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Filterable)]
pub struct Skill {
    pub id: String,

    #[filter(String)]
    pub name: String,

    #[filter(String)]
    pub ability: String,

    #[serde(default)]
    pub description: String,
}

impl Skill {
    pub const TYPE_SCHEMA: &'static str = "\
type Skill {
  id: String!
  name: String!
  ability: String!
  description: String!
}
";
}

impl Entry for Skill {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "Skill"
    }
}
