//! Reading entry files from disk.
//!
//! A data file holds a JSON or YAML array of entries. The format follows
//! the file extension.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::LoadError;

/// Extensions probed by [`find_data_file`], in priority order.
pub const DATA_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

#[derive(Debug, Clone, Copy)]
enum Format {
    Json,
    Yaml,
}

/// Loads every entry from a `.json`, `.yaml` or `.yml` file.
pub fn load_entries<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let format = match extension.as_deref() {
        Some("json") => Format::Json,
        Some("yaml") | Some("yml") => Format::Yaml,
        _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
    };

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<T> = match format {
        Format::Json => serde_json::from_str(&text).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        Format::Yaml => serde_yaml::from_str(&text).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
    };
    debug!(path = %path.display(), entries = entries.len(), "loaded data file");
    Ok(entries)
}

/// Finds `{dir}/{stem}.{ext}` for the first extension that exists.
pub fn find_data_file(dir: &Path, stem: &str) -> Option<PathBuf> {
    DATA_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|candidate| candidate.is_file())
}
