//! One content kind: its entries, filters, schema text and resolvers.
//!
//! A [`Collection`] is assembled once from a [`CollectionOptions`]
//! descriptor and is read-only afterwards. Construction fails fast on the
//! first duplicate entry id or duplicate filter key.

use std::collections::HashMap;
use std::sync::Arc;

use lorebook_filter::{
    compose_filters, fetch_one_field, project_schema, validate_declarations, ComposedPredicate,
    FilterDeclaration, QueryValues,
};
use tracing::debug;

use crate::document::Entry;
use crate::error::ConfigError;
use crate::resolve::Resolver;

/// Descriptor a [`Collection`] is built from.
pub struct CollectionOptions<D: Entry> {
    id: String,
    type_name: String,
    type_schema: String,
    filters: Vec<FilterDeclaration>,
    entries: Vec<D>,
    extensions: Vec<(String, Arc<dyn Resolver>)>,
}

impl<D: Entry> CollectionOptions<D> {
    /// Starts a descriptor with the document kind's own filter declarations.
    pub fn new(id: impl Into<String>, type_name: impl Into<String>, entries: Vec<D>) -> Self {
        CollectionOptions {
            id: id.into(),
            type_name: type_name.into(),
            type_schema: String::new(),
            filters: D::filter_declarations(),
            entries,
            extensions: Vec::new(),
        }
    }

    /// Hand-written schema for the document type itself.
    pub fn type_schema(mut self, schema: impl Into<String>) -> Self {
        self.type_schema = schema.into();
        self
    }

    /// Replaces the filter declarations.
    pub fn filters(mut self, filters: Vec<FilterDeclaration>) -> Self {
        self.filters = filters;
        self
    }

    /// Adds an extra resolver exposed under `key`.
    pub fn extension(mut self, key: impl Into<String>, resolver: impl Resolver + 'static) -> Self {
        self.extensions.push((key.into(), Arc::new(resolver)));
        self
    }

    pub fn build(self) -> Result<Collection<D>, ConfigError> {
        Collection::new(self)
    }
}

/// A validated, immutable collection.
pub struct Collection<D: Entry> {
    id: String,
    type_name: String,
    schema: String,
    entries: Vec<D>,
    by_id: HashMap<String, usize>,
    predicate: ComposedPredicate,
    extensions: Vec<(String, Arc<dyn Resolver>)>,
}

impl<D: Entry> Collection<D> {
    pub fn new(options: CollectionOptions<D>) -> Result<Self, ConfigError> {
        let CollectionOptions {
            id,
            type_name,
            type_schema,
            filters,
            entries,
            extensions,
        } = options;

        validate_declarations(&filters).map_err(|source| ConfigError::InvalidFilters {
            collection: id.clone(),
            source,
        })?;

        let mut by_id = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if by_id.insert(entry.id().to_string(), position).is_some() {
                return Err(ConfigError::DuplicateEntry {
                    collection: id,
                    id: entry.id().to_string(),
                });
            }
        }

        let projection = project_schema(&id, &type_name, &filters);
        let schema = if type_schema.is_empty() {
            projection
        } else {
            format!("{}\n\n{}", type_schema.trim_end(), projection)
        };

        debug!(
            collection = %id,
            entries = entries.len(),
            filters = filters.len(),
            "collection assembled"
        );

        Ok(Collection {
            id,
            type_name,
            schema,
            entries,
            by_id,
            predicate: compose_filters(filters),
            extensions,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Type schema followed by the projected input type and query fields.
    pub fn schema_text(&self) -> &str {
        &self.schema
    }

    /// Resolver key of the fetch-many field (the collection id).
    pub fn fetch_many_key(&self) -> &str {
        &self.id
    }

    /// Resolver key of the fetch-one field.
    pub fn fetch_one_key(&self) -> String {
        fetch_one_field(&self.type_name)
    }

    pub fn entries(&self) -> &[D] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn predicate(&self) -> &ComposedPredicate {
        &self.predicate
    }

    pub fn extensions(&self) -> &[(String, Arc<dyn Resolver>)] {
        &self.extensions
    }

    /// Looks an entry up by id.
    pub fn fetch_one(&self, id: &str) -> Option<&D> {
        self.by_id.get(id).map(|&position| &self.entries[position])
    }

    /// Entries satisfying every query value, in entry order.
    pub fn fetch_many(&self, values: &QueryValues) -> Vec<&D> {
        self.predicate.filter(&self.entries, values)
    }
}

impl<D: Entry + std::fmt::Debug> std::fmt::Debug for Collection<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("id", &self.id)
            .field("type_name", &self.type_name)
            .field("entries", &self.entries.len())
            .field("filters", &self.predicate.declarations().len())
            .field(
                "extensions",
                &self.extensions.iter().map(|(key, _)| key).collect::<Vec<_>>(),
            )
            .finish()
    }
}
