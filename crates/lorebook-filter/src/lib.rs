//! Lorebook filter - typed filter declarations for catalog collections.
//!
//! Each content collection declares a whitelist of `(field, operator)`
//! filters. From that one list this crate derives both:
//!
//! - a runtime predicate ([`ComposedPredicate`]) that evaluates
//!   user-supplied [`QueryValues`] against a document, and
//! - a schema fragment ([`project_schema`]) advertising exactly those keys.
//!
//! Because both come from the same declarations, the query surface and the
//! evaluator cannot drift apart.
//!
//! # Quick Start
//!
//! ```rust
//! use lorebook_filter::{
//!     compose_filters, cost_filters, string_filters, Cost, Currency, FieldValue, Filterable,
//!     QueryValue, QueryValues,
//! };
//!
//! struct Item {
//!     name: String,
//!     cost: Cost,
//! }
//!
//! impl Filterable for Item {
//!     fn field_value(&self, field: &str) -> FieldValue<'_> {
//!         match field {
//!             "name" => FieldValue::String(&self.name),
//!             "cost" => FieldValue::Cost(self.cost),
//!             _ => FieldValue::None,
//!         }
//!     }
//! }
//!
//! let items = vec![
//!     Item { name: "Longsword".into(), cost: Cost::new(15.0, Currency::Gp) },
//!     Item { name: "Torch".into(), cost: Cost::new(1.0, Currency::Cp) },
//! ];
//!
//! let mut declarations = string_filters("name");
//! declarations.extend(cost_filters("cost"));
//! let predicate = compose_filters(declarations);
//!
//! let mut query = QueryValues::new();
//! query.insert("cost_gte".into(), QueryValue::Float(3.0));
//!
//! let results = predicate.filter(&items, &query);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "Longsword");
//! ```
//!
//! # Filter Keys
//!
//! Query values are keyed `field_operator` (`cost_gte`, `tags_has`). That
//! string is the contract between query authors and the engine: the schema
//! input type lists these keys and the predicate looks them up verbatim.
//!
//! | Field kind | Factory | Operators |
//! |------------|---------|-----------|
//! | Int / Float | [`int_filters`], [`float_filters`] | `eq`, `ne`, `lt`, `gt`, `lte`, `gte`, `in` |
//! | String | [`string_filters`] | the above plus `like`, `ilike` |
//! | Cost | [`cost_filters`] | as Float, mapped to gold pieces |
//! | Array | [`array_filters`] | `has` |

mod compose;
mod cost;
mod declaration;
mod error;
mod factory;
mod op;
mod schema;
mod tag;
mod traits;
mod value;

pub use compose::{compose_filters, ComposedPredicate};
pub use cost::{Cost, Currency};
pub use declaration::{
    filter_key, validate_declarations, FilterDeclaration, Mapper, Predicate, KEY_SEPARATOR,
};
pub use error::{FilterError, Result};
pub use factory::{
    array_filters, cost_filters, float_filters, generic_filters, int_filters, string_filters,
};
pub use op::Op;
pub use schema::{fetch_one_field, input_fields, input_type_name, project_schema};
pub use tag::{PrimitiveTag, QueryType};
pub use traits::Filterable;
pub use value::{compare, equality, FieldValue, Number, QueryValue, QueryValues};
