//! Catalog schema, loader, and validated field registry for fieldsync.
//!
//! This crate owns the static field-sync catalog: the serde definition
//! types it is parsed from, the runtime model (`Module`/`Field`/`FieldKey`),
//! and the [`Registry`] which validates the catalog eagerly and exposes an
//! O(1) lookup from a composite `module:field` key to its owning module and
//! field record.

pub mod error;
pub mod loader;
pub mod model;
pub mod registry;
pub mod schema;

pub use error::{Error, Result};
pub use loader::load_catalog;
pub use model::{Field, FieldKey, Module};
pub use registry::Registry;
pub use schema::{CatalogDefinition, FieldDefinition, ModuleDefinition};
