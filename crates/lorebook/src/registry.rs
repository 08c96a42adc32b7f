//! Process-wide registry of collections.
//!
//! The [`RegistryBuilder`] merges every collection's resolvers into one
//! keyed table. The merge is conflict-checked: a resolver key or collection
//! id seen twice is a [`ConfigError`], never a silent overwrite.
//!
//! ```text
//! type Query {
//!   collections: [String!]!
//! }
//!
//! <collection fragments, in registration order>
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::collection::Collection;
use crate::document::Entry;
use crate::error::{ConfigError, ResolveError};
use crate::resolve::{FetchMany, FetchOne, ResolveContext, Resolver};

/// Schema every registry starts from.
pub const BASE_SCHEMA: &str = "type Query {\n  collections: [String!]!\n}\n";

/// Resolver key of the registry's own field.
pub const COLLECTIONS_FIELD: &str = "collections";

/// Type-erased view of a registered collection.
pub trait CollectionInfo: Send + Sync {
    fn id(&self) -> &str;
    fn type_name(&self) -> &str;
    fn schema_text(&self) -> &str;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D: Entry> CollectionInfo for Collection<D> {
    fn id(&self) -> &str {
        Collection::id(self)
    }

    fn type_name(&self) -> &str {
        Collection::type_name(self)
    }

    fn schema_text(&self) -> &str {
        Collection::schema_text(self)
    }

    fn len(&self) -> usize {
        Collection::len(self)
    }
}

/// Assembles a [`Registry`].
pub struct RegistryBuilder {
    collections: Vec<Arc<dyn CollectionInfo>>,
    resolvers: BTreeMap<String, Arc<dyn Resolver>>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        RegistryBuilder {
            collections: Vec::new(),
            resolvers: BTreeMap::new(),
        }
    }

    /// Registers a collection with its fetch-one, fetch-many and extension
    /// resolvers.
    pub fn collection<D: Entry>(mut self, collection: Collection<D>) -> Result<Self, ConfigError> {
        if self.collections.iter().any(|c| c.id() == collection.id()) {
            return Err(ConfigError::DuplicateCollection(collection.id().to_string()));
        }

        let collection = Arc::new(collection);
        let many_key = collection.fetch_many_key().to_string();
        let one_key = collection.fetch_one_key();

        self.merge(
            many_key.clone(),
            Arc::new(FetchMany::new(many_key, Arc::clone(&collection))),
        )?;
        self.merge(
            one_key.clone(),
            Arc::new(FetchOne::new(one_key, Arc::clone(&collection))),
        )?;
        for (key, resolver) in collection.extensions() {
            self.merge(key.clone(), Arc::clone(resolver))?;
        }

        self.collections.push(collection);
        Ok(self)
    }

    /// Adds a resolver that belongs to no collection.
    pub fn resolver(
        mut self,
        key: impl Into<String>,
        resolver: impl Resolver + 'static,
    ) -> Result<Self, ConfigError> {
        self.merge(key.into(), Arc::new(resolver))?;
        Ok(self)
    }

    fn merge(&mut self, key: String, resolver: Arc<dyn Resolver>) -> Result<(), ConfigError> {
        if key == COLLECTIONS_FIELD || self.resolvers.contains_key(&key) {
            return Err(ConfigError::DuplicateResolver(key));
        }
        debug!(key = %key, "resolver bound");
        self.resolvers.insert(key, resolver);
        Ok(())
    }

    pub fn build(mut self) -> Registry {
        let ids: Vec<String> = self
            .collections
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        let listing = Value::from(ids);
        self.resolvers.insert(
            COLLECTIONS_FIELD.to_string(),
            Arc::new(move |_: &Value, _: &ResolveContext| Ok::<_, ResolveError>(listing.clone())),
        );

        let mut schema = BASE_SCHEMA.to_string();
        for collection in &self.collections {
            schema.push('\n');
            schema.push_str(collection.schema_text());
        }

        info!(
            collections = self.collections.len(),
            resolvers = self.resolvers.len(),
            "registry assembled"
        );

        Registry {
            collections: self.collections,
            resolvers: self.resolvers,
            schema,
        }
    }
}

/// All collections and the merged resolver table. Immutable once built.
pub struct Registry {
    collections: Vec<Arc<dyn CollectionInfo>>,
    resolvers: BTreeMap<String, Arc<dyn Resolver>>,
    schema: String,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Base schema followed by every collection fragment.
    pub fn full_schema(&self) -> &str {
        &self.schema
    }

    /// Registered collections in registration order.
    pub fn collections(&self) -> impl Iterator<Item = &dyn CollectionInfo> {
        self.collections.iter().map(|c| c.as_ref())
    }

    pub fn collection(&self, id: &str) -> Option<&dyn CollectionInfo> {
        self.collections().find(|c| c.id() == id)
    }

    /// Every bound resolver key, sorted.
    pub fn resolver_keys(&self) -> impl Iterator<Item = &str> {
        self.resolvers.keys().map(String::as_str)
    }

    pub fn resolver(&self, key: &str) -> Option<&dyn Resolver> {
        self.resolvers.get(key).map(|r| r.as_ref())
    }

    /// Resolves one query field.
    pub fn resolve(
        &self,
        key: &str,
        args: &Value,
        ctx: &ResolveContext,
    ) -> Result<Value, ResolveError> {
        let resolver = self
            .resolver(key)
            .ok_or_else(|| ResolveError::UnknownField(key.to_string()))?;
        resolver.resolve(args, ctx)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field(
                "collections",
                &self.collections.iter().map(|c| c.id()).collect::<Vec<_>>(),
            )
            .field("resolvers", &self.resolvers.keys().collect::<Vec<_>>())
            .finish()
    }
}
