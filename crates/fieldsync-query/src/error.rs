//! Error types for fieldsync-query

use fieldsync_registry::FieldKey;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown field: {key}")]
    UnknownField { key: FieldKey },
}
