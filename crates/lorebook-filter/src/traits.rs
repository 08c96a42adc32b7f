//! Document access trait.
//!
//! [`Filterable`] is what the composed predicate calls to read a field off a
//! document. It is usually derived with `#[derive(Filterable)]` from
//! `lorebook-macros`, which also generates [`Filterable::filter_declarations`]
//! from the same field annotations.

use crate::declaration::FilterDeclaration;
use crate::value::FieldValue;

/// Types whose fields can be read by the filter engine.
///
/// # Derive Usage
///
/// ```ignore
/// use lorebook_macros::Filterable;
///
/// #[derive(Filterable)]
/// struct Spell {
///     #[filter(String)]
///     name: String,
///     #[filter(Int)]
///     level: u8,
///     #[filter(Array(String))]
///     classes: Vec<String>,
/// }
///
/// // name_eq .. name_ilike, level_eq .. level_in, classes_has
/// assert_eq!(Spell::filter_declarations().len(), 9 + 7 + 1);
/// ```
///
/// # Manual Implementation
///
/// ```
/// use lorebook_filter::{string_filters, FieldValue, FilterDeclaration, Filterable};
///
/// struct Skill {
///     name: String,
///     ability: String,
/// }
///
/// impl Filterable for Skill {
///     fn field_value(&self, field: &str) -> FieldValue<'_> {
///         match field {
///             "name" => FieldValue::String(&self.name),
///             "ability" => FieldValue::String(&self.ability),
///             _ => FieldValue::None,
///         }
///     }
///
///     fn filter_declarations() -> Vec<FilterDeclaration> {
///         let mut filters = string_filters("name");
///         filters.extend(string_filters("ability"));
///         filters
///     }
/// }
/// ```
pub trait Filterable {
    /// Returns the raw value of a field, or [`FieldValue::None`] if the
    /// field does not exist on this document.
    fn field_value(&self, field: &str) -> FieldValue<'_>;

    /// The filter declarations this document kind supports.
    ///
    /// Defaults to none, which leaves the collection unfilterable.
    fn filter_declarations() -> Vec<FilterDeclaration>
    where
        Self: Sized,
    {
        Vec::new()
    }

    /// Returns a function pointer suitable for accessor-style call sites.
    fn accessor<'a>(item: &'a Self, field: &str) -> FieldValue<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        (**self).field_value(field)
    }
}
