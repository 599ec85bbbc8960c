//! Catalog loading from TOML, JSON, or YAML files
//!
//! Format is detected from the file extension; the parsed definition is
//! validated into a [`Registry`] before it is returned, so a loaded catalog
//! is always internally consistent.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::schema::CatalogDefinition;

/// Load and validate a catalog file.
///
/// Format is detected from the file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
///
/// # Errors
///
/// [`Error::CatalogNotFound`] if the file does not exist,
/// [`Error::UnsupportedFormat`] for other extensions,
/// [`Error::CatalogParse`] on malformed content, plus any validation error
/// from [`Registry::from_definition`].
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Registry> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading catalog");

    if !path.exists() {
        return Err(Error::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let definition: CatalogDefinition = match extension.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| Error::CatalogParse {
            path: path.to_path_buf(),
            format: "TOML".into(),
            message: e.to_string(),
        })?,
        "json" => serde_json::from_str(&content).map_err(|e| Error::CatalogParse {
            path: path.to_path_buf(),
            format: "JSON".into(),
            message: e.to_string(),
        })?,
        "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::CatalogParse {
            path: path.to_path_buf(),
            format: "YAML".into(),
            message: e.to_string(),
        })?,
        _ => {
            return Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            });
        }
    };

    let registry = Registry::from_definition(definition)?;
    tracing::info!(
        path = %path.display(),
        modules = registry.modules().len(),
        fields = registry.len(),
        "catalog loaded"
    );
    Ok(registry)
}
