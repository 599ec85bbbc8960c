//! Per-cell highlight status, derived purely from a query result
//!
//! The presentation layer asks, for every `(module, field)` cell it
//! renders, how the cell relates to the current selection. The answer is a
//! pure function of the selection and its [`SyncQueryResult`] — no
//! registry access, no state.

use serde::Serialize;

use fieldsync_registry::{FieldKey, Registry};

use crate::engine::SyncQueryResult;

/// How a rendered cell relates to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStatus {
    /// The selected field itself
    Source,
    /// A resolved sync target of the selection
    Target,
    /// Same field id elsewhere, not wired into the sync relation
    Unlinked,
}

/// Status of one cell relative to the selection, or `None` for no
/// highlight.
///
/// Total over every cell in the registry, including cells never selected.
pub fn cell_status(
    selected: &FieldKey,
    result: &SyncQueryResult,
    cell: &FieldKey,
) -> Option<CellStatus> {
    if cell == selected {
        return Some(CellStatus::Source);
    }
    if result
        .sync_targets
        .iter()
        .any(|t| t.module_id == cell.module_id && t.field_id == cell.field_id)
    {
        return Some(CellStatus::Target);
    }
    if cell.field_id == selected.field_id
        && result
            .unconnected_modules
            .iter()
            .any(|m| m.id == cell.module_id)
    {
        return Some(CellStatus::Unlinked);
    }
    None
}

/// Re-derive the status of every field in the registry for one selection.
///
/// Full recomputation per selection event; catalogs are small enough that
/// incremental diffing is not worth carrying.
pub fn status_map(
    registry: &Registry,
    selected: &FieldKey,
    result: &SyncQueryResult,
) -> Vec<(FieldKey, Option<CellStatus>)> {
    registry
        .field_keys()
        .map(|key| {
            let status = cell_status(selected, result, &key);
            (key, status)
        })
        .collect()
}
