//! Implementation of the `#[derive(Filterable)]` macro.
//!
//! Generates the field accessor and the filter declarations of a document
//! type from its `#[filter(...)]` field annotations.

mod attrs;
mod derive;

pub use derive::filterable_derive_impl;
