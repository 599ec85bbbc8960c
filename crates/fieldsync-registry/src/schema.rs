//! Serde definition types for the field-sync catalog
//!
//! These types mirror the on-disk catalog shape (TOML, JSON, or YAML).
//! Sync edges are kept as raw `"moduleId:fieldId"` strings here; they are
//! parsed and validated when the definition is turned into a
//! [`Registry`](crate::Registry).

use serde::{Deserialize, Serialize};

/// The full catalog: an ordered list of module definitions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// Modules in display order
    #[serde(default)]
    pub modules: Vec<ModuleDefinition>,
}

/// A single module (form/dataset) definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    /// Globally unique module identifier
    pub id: String,
    /// Human-readable module name
    pub name: String,
    /// Fields in display order
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// A single field definition within a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FieldDefinition {
    /// Field identifier, unique within its module (may recur across modules)
    pub id: String,
    /// Human-readable field name
    pub name: String,
    /// Read-only fields are never sync sources
    #[serde(default)]
    pub read_only: bool,
    /// Sync targets as composite `"moduleId:fieldId"` keys, in the order
    /// dependents should be reported
    #[serde(default)]
    pub syncs_to: Vec<String>,
}
