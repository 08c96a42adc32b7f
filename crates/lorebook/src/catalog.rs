//! The shipped catalog: items, spells, skills and conditions.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::collection::CollectionOptions;
use crate::config::LorebookConfig;
use crate::document::{Condition, Item, Skill, Spell};
use crate::error::{LoadError, Result};
use crate::loader::{find_data_file, load_entries};
use crate::registry::Registry;

pub const ITEMS: &str = "items";
pub const SPELLS: &str = "spells";
pub const SKILLS: &str = "skills";
pub const CONDITIONS: &str = "conditions";

/// Entries of every catalog collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub items: Vec<Item>,
    pub spells: Vec<Spell>,
    pub skills: Vec<Skill>,
    pub conditions: Vec<Condition>,
}

impl Catalog {
    /// Reads `{dir}/{collection}.{json,yaml,yml}` for every collection.
    pub fn read(dir: &Path) -> std::result::Result<Self, LoadError> {
        Ok(Catalog {
            items: read_collection(dir, ITEMS)?,
            spells: read_collection(dir, SPELLS)?,
            skills: read_collection(dir, SKILLS)?,
            conditions: read_collection(dir, CONDITIONS)?,
        })
    }

    /// Builds the registry, in the order items, spells, skills, conditions.
    pub fn into_registry(self) -> Result<Registry> {
        let registry = Registry::builder()
            .collection(
                CollectionOptions::new(ITEMS, "Item", self.items)
                    .type_schema(Item::TYPE_SCHEMA)
                    .build()?,
            )?
            .collection(
                CollectionOptions::new(SPELLS, "Spell", self.spells)
                    .type_schema(Spell::TYPE_SCHEMA)
                    .build()?,
            )?
            .collection(
                CollectionOptions::new(SKILLS, "Skill", self.skills)
                    .type_schema(Skill::TYPE_SCHEMA)
                    .build()?,
            )?
            .collection(
                CollectionOptions::new(CONDITIONS, "Condition", self.conditions)
                    .type_schema(Condition::TYPE_SCHEMA)
                    .build()?,
            )?
            .build();
        Ok(registry)
    }
}

fn read_collection<T: DeserializeOwned>(
    dir: &Path,
    collection: &str,
) -> std::result::Result<Vec<T>, LoadError> {
    match find_data_file(dir, collection) {
        Some(path) => load_entries(path),
        None => {
            warn!(
                collection,
                dir = %dir.display(),
                "no data file found, collection is empty"
            );
            Ok(Vec::new())
        }
    }
}

/// Loads the catalog from `config.data_dir` and assembles the registry.
pub fn load_catalog(config: &LorebookConfig) -> Result<Registry> {
    info!(data_dir = %config.data_dir.display(), "loading catalog");
    Catalog::read(&config.data_dir)?.into_registry()
}
