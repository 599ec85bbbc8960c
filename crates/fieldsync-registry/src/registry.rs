//! Validated field registry with O(1) composite-key lookup
//!
//! The [`Registry`] is the runtime form of a [`CatalogDefinition`]: every
//! identifier checked for uniqueness, every sync edge parsed and resolved,
//! and a lookup index built from the composite `"moduleId:fieldId"` key to
//! the owning module and field. Validation is eager and fail-fast: a broken
//! catalog is a configuration bug, not a condition to recover from per
//! query.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::model::{Field, FieldKey, Module};
use crate::schema::{CatalogDefinition, FieldDefinition, ModuleDefinition};

const DEFAULT_CATALOG: &str = include_str!("../catalog/default.toml");

/// Immutable catalog of modules with a field lookup index.
///
/// # Example
///
/// ```
/// use fieldsync_registry::{FieldKey, Registry};
///
/// let registry = Registry::builtin();
/// let key = FieldKey::new("edit-profile", "display-name");
/// let (module, field) = registry.resolve(&key).unwrap();
/// assert_eq!(module.name, "Edit Profile");
/// assert_eq!(field.syncs_to.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    modules: Vec<Module>,
    /// Composite `"moduleId:fieldId"` key to (module index, field index)
    index: HashMap<String, (usize, usize)>,
}

impl Registry {
    /// Build a registry from a catalog definition, validating eagerly.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateModule`] — two modules share an id
    /// - [`Error::DuplicateKey`] — two fields collide on the composite key
    /// - [`Error::InvalidFieldKey`] — a `syncs-to` entry is not
    ///   `"moduleId:fieldId"`
    /// - [`Error::DanglingSyncTarget`] — a sync edge points at a field no
    ///   module defines
    pub fn from_definition(definition: CatalogDefinition) -> Result<Self> {
        let modules = definition
            .modules
            .into_iter()
            .map(build_module)
            .collect::<Result<Vec<_>>>()?;

        let index = build_index(&modules)?;

        // Every edge target must resolve; check after the full index exists
        // so forward references within the catalog are fine.
        for module in &modules {
            for field in &module.fields {
                for target in &field.syncs_to {
                    if !index.contains_key(&target.to_string()) {
                        return Err(Error::DanglingSyncTarget {
                            source_key: FieldKey::new(&module.id, &field.id).to_string(),
                            target: target.to_string(),
                        });
                    }
                }
            }
        }

        tracing::debug!(
            modules = modules.len(),
            fields = index.len(),
            "registry validated"
        );

        Ok(Self { modules, index })
    }

    /// The built-in catalog: Edit Profile, Notification Preferences Portal,
    /// and Profile Preferences Dataset, with their hand-authored sync edges.
    pub fn builtin() -> Self {
        // The embedded catalog is covered by tests; a parse or validation
        // failure here is a build defect, not a runtime condition.
        Self::parse_builtin().expect("embedded default catalog is valid")
    }

    fn parse_builtin() -> Result<Self> {
        let definition: CatalogDefinition =
            toml::from_str(DEFAULT_CATALOG).map_err(|e| Error::CatalogParse {
                path: "catalog/default.toml".into(),
                format: "TOML".into(),
                message: e.to_string(),
            })?;
        Self::from_definition(definition)
    }

    /// Modules in catalog order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Look up a module by id.
    pub fn module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// Resolve a composite key to its owning module and field record.
    ///
    /// O(1) average via the index built at construction.
    pub fn resolve(&self, key: &FieldKey) -> Option<(&Module, &Field)> {
        let &(module_idx, field_idx) = self.index.get(&key.to_string())?;
        let module = &self.modules[module_idx];
        Some((module, &module.fields[field_idx]))
    }

    /// Whether the registry contains the given field.
    pub fn contains(&self, key: &FieldKey) -> bool {
        self.index.contains_key(&key.to_string())
    }

    /// Every field key in the registry, in catalog order.
    pub fn field_keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.modules.iter().flat_map(|module| {
            module
                .fields
                .iter()
                .map(|field| FieldKey::new(&module.id, &field.id))
        })
    }

    /// Total number of fields across all modules.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the registry holds no fields at all.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn build_module(definition: ModuleDefinition) -> Result<Module> {
    let fields = definition
        .fields
        .into_iter()
        .map(build_field)
        .collect::<Result<Vec<_>>>()?;

    Ok(Module {
        id: definition.id,
        name: definition.name,
        fields,
    })
}

fn build_field(definition: FieldDefinition) -> Result<Field> {
    let syncs_to = definition
        .syncs_to
        .iter()
        .map(|raw| raw.parse::<FieldKey>())
        .collect::<Result<Vec<_>>>()?;

    Ok(Field {
        id: definition.id,
        name: definition.name,
        read_only: definition.read_only,
        syncs_to,
    })
}

fn build_index(modules: &[Module]) -> Result<HashMap<String, (usize, usize)>> {
    let mut seen_modules: HashSet<&str> = HashSet::new();
    let mut index = HashMap::new();

    for (module_idx, module) in modules.iter().enumerate() {
        if !seen_modules.insert(&module.id) {
            return Err(Error::DuplicateModule {
                id: module.id.clone(),
            });
        }
        for (field_idx, field) in module.fields.iter().enumerate() {
            let key = FieldKey::new(&module.id, &field.id).to_string();
            if index.insert(key.clone(), (module_idx, field_idx)).is_some() {
                // Module ids are unique by the check above, so a collision
                // means the field id recurs within this module. Fail fast
                // rather than letting a later insert shadow an earlier one.
                return Err(Error::DuplicateKey { key });
            }
        }
    }

    Ok(index)
}
