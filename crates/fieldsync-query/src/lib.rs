//! Sync query engine for the fieldsync registry.
//!
//! Given a validated [`Registry`](fieldsync_registry::Registry) and a
//! selected field, [`query_field`] answers three questions: which fields
//! the selection propagates to, which modules carry the same field but are
//! not wired in, and which modules lack the field entirely. The engine is
//! a stateless pure function; the caller owns the current selection and
//! re-invokes it per selection event.

pub mod engine;
pub mod error;
pub mod status;

pub use engine::{ModuleRef, SyncQueryResult, SyncTarget, query_field};
pub use error::{Error, Result};
pub use status::{CellStatus, cell_status, status_map};
