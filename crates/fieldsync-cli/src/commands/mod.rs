//! Command implementations for fieldsync-cli

pub mod check;
pub mod inspect;
pub mod list;

pub use check::run_check;
pub use inspect::run_inspect;
pub use list::run_list;

use std::path::Path;

use fieldsync_registry::{Registry, load_catalog};

use crate::error::Result;

/// Load the catalog at `path`, or fall back to the built-in catalog.
pub fn load_registry(path: Option<&Path>) -> Result<Registry> {
    match path {
        Some(path) => Ok(load_catalog(path)?),
        None => Ok(Registry::builtin()),
    }
}
