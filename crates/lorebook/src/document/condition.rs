use lorebook_macros::Filterable;
use serde::{Deserialize, Serialize};

use super::Entry;

/// A status condition. Conditions are few enough that they declare no
/// filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Filterable)]
pub struct Condition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Condition {
    pub const TYPE_SCHEMA: &'static str = "\
type Condition {
  id: String!
  name: String!
  description: String!
}
";
}

impl Entry for Condition {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "Condition"
    }
}
