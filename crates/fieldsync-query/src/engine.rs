//! The field-sync query: targets, unconnected modules, absent modules
//!
//! For a selected field the engine reports every module in exactly one
//! bucket: it is the source, it is a sync target, it carries the same
//! field id without an edge, or it lacks the field. Presence is matched by
//! *field id*; linkage is matched by *edge target module id*. The two
//! deliberately differ — the catalog's hand-authored edges are asymmetric
//! and may target a differently-named field in the other module.

use std::collections::HashSet;

use serde::Serialize;

use fieldsync_registry::{FieldKey, Registry};

use crate::error::{Error, Result};

/// One resolved sync edge, with display names for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SyncTarget {
    pub module_id: String,
    pub field_id: String,
    pub module_name: String,
    pub field_name: String,
}

impl SyncTarget {
    /// The composite key of the target field.
    pub fn key(&self) -> FieldKey {
        FieldKey::new(&self.module_id, &self.field_id)
    }
}

/// A module referenced by id and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRef {
    pub id: String,
    pub name: String,
}

/// Result of querying a single selected field.
///
/// When `is_read_only` is true the outcome is terminal: read-only fields
/// are never sync sources, and all three lists are empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SyncQueryResult {
    pub is_read_only: bool,
    /// Resolved edges in catalog order — the order dependents are listed,
    /// not sorted
    pub sync_targets: Vec<SyncTarget>,
    /// Modules (other than the source) carrying the same field id with no
    /// edge targeting them, in catalog order
    pub unconnected_modules: Vec<ModuleRef>,
    /// Modules with no field of the selected id, in catalog order
    pub absent_modules: Vec<ModuleRef>,
}

/// Evaluate the sync query for a selected field.
///
/// Pure and stateless: the registry is read-only and the selection is an
/// explicit argument, so concurrent calls need no synchronization.
///
/// # Errors
///
/// [`Error::UnknownField`] if the selection does not resolve in the
/// registry. An unknown selection is a failure, never "no selection".
pub fn query_field(registry: &Registry, selected: &FieldKey) -> Result<SyncQueryResult> {
    let (_, field) = registry.resolve(selected).ok_or_else(|| Error::UnknownField {
        key: selected.clone(),
    })?;

    if field.read_only {
        tracing::debug!(selected = %selected, "read-only field selected");
        return Ok(SyncQueryResult {
            is_read_only: true,
            ..SyncQueryResult::default()
        });
    }

    let mut sync_targets = Vec::with_capacity(field.syncs_to.len());
    for target in &field.syncs_to {
        // Registry validation guarantees resolution; propagate anyway so a
        // dangling edge can never silently reach the output.
        let (module, target_field) =
            registry.resolve(target).ok_or_else(|| Error::UnknownField {
                key: target.clone(),
            })?;
        sync_targets.push(SyncTarget {
            module_id: target.module_id.clone(),
            field_id: target.field_id.clone(),
            module_name: module.name.clone(),
            field_name: target_field.name.clone(),
        });
    }

    let linked_modules: HashSet<&str> = field
        .syncs_to
        .iter()
        .map(|t| t.module_id.as_str())
        .collect();

    let mut unconnected_modules = Vec::new();
    let mut absent_modules = Vec::new();
    for module in registry.modules() {
        if !module.has_field(&selected.field_id) {
            absent_modules.push(ModuleRef {
                id: module.id.clone(),
                name: module.name.clone(),
            });
        } else if module.id != selected.module_id && !linked_modules.contains(module.id.as_str()) {
            unconnected_modules.push(ModuleRef {
                id: module.id.clone(),
                name: module.name.clone(),
            });
        }
    }

    Ok(SyncQueryResult {
        is_read_only: false,
        sync_targets,
        unconnected_modules,
        absent_modules,
    })
}
