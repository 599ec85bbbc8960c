//! Error types for fieldsync-registry

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    #[error("Failed to parse {format} catalog at {path}: {message}")]
    CatalogParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported catalog format: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("Invalid field key '{raw}': expected 'moduleId:fieldId'")]
    InvalidFieldKey { raw: String },

    #[error("Duplicate module id: {id}")]
    DuplicateModule { id: String },

    #[error("Duplicate composite key: {key}")]
    DuplicateKey { key: String },

    #[error("Field '{source_key}' syncs to '{target}', which does not exist")]
    DanglingSyncTarget { source_key: String, target: String },
}
