//! Error types for the lorebook crate.
//!
//! Configuration errors are fatal and abort startup. Lookups never error:
//! a missing entry is a `None` (or JSON `null` at the resolver boundary).

use std::path::PathBuf;

use lorebook_filter::FilterError;
use thiserror::Error;

/// Errors raised while assembling collections and the registry.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two entries of one collection share an identifier.
    #[error("collection '{collection}' has duplicate entry id '{id}'")]
    DuplicateEntry { collection: String, id: String },

    /// Two collections were registered under the same identifier.
    #[error("collection '{0}' is registered twice")]
    DuplicateCollection(String),

    /// Two collections expose the same resolver key.
    #[error("resolver key '{0}' is exposed more than once")]
    DuplicateResolver(String),

    /// A collection's filter declarations are inconsistent.
    #[error("collection '{collection}' has invalid filters: {source}")]
    InvalidFilters {
        collection: String,
        #[source]
        source: FilterError,
    },

    /// The settings file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid YAML for [`LorebookConfig`](crate::LorebookConfig).
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors returned by resolvers at the query boundary.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No resolver is bound to the requested key.
    #[error("unknown query field '{0}'")]
    UnknownField(String),

    /// Arguments did not match the resolver's expected shape.
    #[error("invalid arguments for '{field}': {message}")]
    InvalidArguments { field: String, message: String },

    /// An entry could not be serialized.
    #[error("failed to serialize entry: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The expression evaluator rejected a document.
    #[error("expression evaluation failed: {0}")]
    Evaluation(String),
}

/// Errors raised while reading entry files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The file extension is not one of `json`, `yaml` or `yml`.
    #[error("unsupported data file format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Any lorebook error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Result type for lorebook operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = ConfigError::DuplicateEntry {
            collection: "spells".into(),
            id: "fireball".into(),
        };
        assert_eq!(
            err.to_string(),
            "collection 'spells' has duplicate entry id 'fireball'"
        );
        assert_eq!(
            ConfigError::DuplicateResolver("spell".into()).to_string(),
            "resolver key 'spell' is exposed more than once"
        );
    }

    #[test]
    fn umbrella_is_transparent() {
        let err: Error = ResolveError::UnknownField("potions".into()).into();
        assert_eq!(err.to_string(), "unknown query field 'potions'");
    }
}
