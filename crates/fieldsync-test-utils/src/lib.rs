//! Shared test fixtures for the fieldsync workspace.
//!
//! Small builders for catalog definitions plus the canned scenario
//! catalogs the query tests exercise. Dev-dependency only — never
//! published.

use fieldsync_registry::{CatalogDefinition, FieldDefinition, ModuleDefinition, Registry};

/// A module definition named `"Module <ID>"` after its id.
pub fn module(id: &str, fields: Vec<FieldDefinition>) -> ModuleDefinition {
    ModuleDefinition {
        id: id.into(),
        name: format!("Module {}", id.to_uppercase()),
        fields,
    }
}

/// A plain field with no sync edges.
pub fn field(id: &str) -> FieldDefinition {
    field_syncing(id, &[])
}

/// A field syncing to the given `"module:field"` targets, in order.
pub fn field_syncing(id: &str, targets: &[&str]) -> FieldDefinition {
    FieldDefinition {
        id: id.into(),
        name: format!("Field {}", id.to_uppercase()),
        read_only: false,
        syncs_to: targets.iter().map(|t| t.to_string()).collect(),
    }
}

/// A read-only field with the given sync edges (which a well-behaved
/// engine must ignore).
pub fn read_only_field(id: &str, targets: &[&str]) -> FieldDefinition {
    FieldDefinition {
        read_only: true,
        ..field_syncing(id, targets)
    }
}

/// Wrap modules into a catalog definition.
pub fn catalog(modules: Vec<ModuleDefinition>) -> CatalogDefinition {
    CatalogDefinition { modules }
}

/// Build a validated registry, panicking on invalid fixture data.
pub fn registry(definition: CatalogDefinition) -> Registry {
    Registry::from_definition(definition).expect("fixture catalog must be valid")
}

/// A={x syncing to B:x}, B={x}, C={} — one target, one absent module.
pub fn linear_catalog() -> CatalogDefinition {
    catalog(vec![
        module("a", vec![field_syncing("x", &["b:x"])]),
        module("b", vec![field("x")]),
        module("c", vec![]),
    ])
}

/// A={x}, B={x} — same field id in both modules, no edge between them.
pub fn unlinked_catalog() -> CatalogDefinition {
    catalog(vec![
        module("a", vec![field("x")]),
        module("b", vec![field("x")]),
    ])
}
