//! Catalog document kinds.
//!
//! Every document exposes a stable `id`, a display `name`, and the schema
//! type it resolves to. Union kinds such as [`Item`] pick the concrete type
//! per entry with an exhaustive `match`.

mod condition;
mod item;
mod skill;
mod spell;

pub use condition::Condition;
pub use item::{Item, ItemKind};
pub use skill::Skill;
pub use spell::Spell;

use lorebook_filter::Filterable;
use serde::Serialize;

/// A document that can live in a [`Collection`](crate::Collection).
pub trait Entry: Filterable + Serialize + Send + Sync + 'static {
    /// Identifier, unique within the owning collection.
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Concrete schema type of this entry, reported as `__typename`.
    fn type_name(&self) -> &'static str;
}
