//! Runtime model types: modules, fields, and the composite field key
//!
//! These are the validated, immutable counterparts of the serde types in
//! [`schema`](crate::schema). Nothing here is mutated after the registry
//! is built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Composite key identifying a field within a module.
///
/// The canonical text form is `"moduleId:fieldId"`, the shape sync edges
/// use in the catalog file and the shape selections arrive in.
///
/// # Example
///
/// ```
/// use fieldsync_registry::FieldKey;
///
/// let key: FieldKey = "edit-profile:display-name".parse().unwrap();
/// assert_eq!(key.module_id, "edit-profile");
/// assert_eq!(key.field_id, "display-name");
/// assert_eq!(key.to_string(), "edit-profile:display-name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldKey {
    /// Owning module identifier
    pub module_id: String,
    /// Field identifier within the module
    pub field_id: String,
}

impl FieldKey {
    /// Create a key from its two parts.
    pub fn new(module_id: impl Into<String>, field_id: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            field_id: field_id.into(),
        }
    }
}

impl FromStr for FieldKey {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((module_id, field_id))
                if !module_id.is_empty() && !field_id.is_empty() && !field_id.contains(':') =>
            {
                Ok(Self::new(module_id, field_id))
            }
            _ => Err(Error::InvalidFieldKey { raw: s.to_string() }),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module_id, self.field_id)
    }
}

/// A named form/dataset containing an ordered list of fields.
///
/// Identity is the `id`; module order and field order match the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Module {
    pub id: String,
    pub name: String,
    pub fields: Vec<Field>,
}

impl Module {
    /// Look up a field of this module by identifier.
    pub fn field(&self, field_id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// Whether this module has a field with the given identifier.
    pub fn has_field(&self, field_id: &str) -> bool {
        self.field(field_id).is_some()
    }
}

/// A named, possibly read-only attribute within a module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub id: String,
    pub name: String,
    /// Read-only fields are never sync sources
    pub read_only: bool,
    /// Directed sync edges, in catalog order
    pub syncs_to: Vec<FieldKey>,
}
