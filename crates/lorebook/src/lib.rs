//! Lorebook - a filterable catalog of tabletop reference content.
//!
//! Each content kind is a [`Collection`]: a list of entries, the filters
//! its documents declare, and the schema fragment projected from those
//! filters. The [`Registry`] merges every collection's resolvers into one
//! query surface and concatenates their schema text.
//!
//! # Example
//!
//! ```rust
//! use lorebook::{CollectionOptions, Registry, ResolveContext, Skill};
//! use serde_json::json;
//!
//! let skills = vec![
//!     Skill { id: "stealth".into(), name: "Stealth".into(), ability: "dex".into(), description: String::new() },
//!     Skill { id: "insight".into(), name: "Insight".into(), ability: "wis".into(), description: String::new() },
//! ];
//!
//! let registry = Registry::builder()
//!     .collection(CollectionOptions::new("skills", "Skill", skills).build()?)?
//!     .build();
//!
//! let ctx = ResolveContext::default();
//! let found = registry.resolve("skills", &json!({"filter": {"ability_eq": "dex"}}), &ctx)?;
//! assert_eq!(found[0]["id"], "stealth");
//! assert_eq!(found[0]["__typename"], "Skill");
//!
//! let missing = registry.resolve("skill", &json!({"id": "arcana"}), &ctx)?;
//! assert!(missing.is_null());
//! # Ok::<(), lorebook::Error>(())
//! ```

pub mod catalog;
mod collection;
mod config;
pub mod document;
mod error;
pub mod loader;
mod registry;
mod resolve;

pub use catalog::{load_catalog, Catalog};
pub use collection::{Collection, CollectionOptions};
pub use config::{LorebookConfig, DEFAULT_LOG_FILTER};
pub use document::{Condition, Entry, Item, ItemKind, Skill, Spell};
pub use error::{ConfigError, Error, LoadError, ResolveError, Result};
pub use registry::{CollectionInfo, Registry, RegistryBuilder, BASE_SCHEMA, COLLECTIONS_FIELD};
pub use resolve::{
    parse_args, present, EvalMode, ExpressionEvaluator, FetchMany, FetchManyArgs, FetchOne,
    FetchOneArgs, PassthroughEvaluator, ResolveContext, Resolver, TYPENAME_FIELD,
};

pub use lorebook_filter as filter;
