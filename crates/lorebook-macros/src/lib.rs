//! Proc macros for Lorebook.
//!
//! # Derive Macros
//!
//! - [`Filterable`] - Generate the field accessor and filter declarations
//!   of a document type
//!
//! For working examples, see `lorebook/tests/filterable_derive.rs`.

mod filterable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Filterable` trait for catalog document structs.
///
/// This macro generates an implementation of the `Filterable` trait from
/// `lorebook-filter`: a `field_value` accessor and the filter declarations
/// built from the factory matching each annotated field.
///
/// # Field Attributes
///
/// | Attribute | Field type | Declared operators |
/// |-----------|------------|--------------------|
/// | `Int` | `Into<i64>` | `eq`, `ne`, `lt`, `gt`, `lte`, `gte`, `in` |
/// | `Float` | `Into<f64>` | as `Int` |
/// | `String` | `AsRef<str>` | as `Int`, plus `like`, `ilike` |
/// | `Boolean` | `bool` | as `Int` |
/// | `Cost` | `Cost` | as `Float`, compared in gold pieces |
/// | `Array(T)` | iterable of `T` | `has` |
/// | `skip` | any | none |
/// | `rename = "..."` | any | use a custom field name in filter keys |
///
/// Fields without a `#[filter(...)]` attribute are not filterable.
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Spell::LEVEL`, `Spell::CLASSES`)
/// 2. `Filterable::field_value()` and `Filterable::filter_declarations()`
///
/// # Example
///
/// ```ignore
/// use lorebook_filter::{compose_filters, Filterable, QueryValues};
/// use lorebook_macros::Filterable;
///
/// #[derive(Filterable)]
/// struct Spell {
///     #[filter(String)]
///     name: String,
///
///     #[filter(Int)]
///     level: u8,
///
///     #[filter(Array(String))]
///     classes: Vec<String>,
///
///     description: String,
/// }
///
/// let predicate = compose_filters(Spell::filter_declarations());
/// let mut query = QueryValues::new();
/// query.insert(format!("{}_lte", Spell::LEVEL), 3.into());
/// query.insert(format!("{}_has", Spell::CLASSES), "wizard".into());
/// let results = predicate.filter(&spells, &query);
/// ```
#[proc_macro_derive(Filterable, attributes(filter))]
pub fn filterable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    filterable::filterable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
