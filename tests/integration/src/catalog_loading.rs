//! Catalog loading across formats, end to end through the query engine

use std::fs;

use fieldsync_query::query_field;
use fieldsync_registry::{FieldKey, load_catalog};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const CATALOG_TOML: &str = r#"
[[modules]]
id = "profile"
name = "Profile"

[[modules.fields]]
id = "nickname"
name = "Nickname"
syncs-to = ["directory:nickname"]

[[modules.fields]]
id = "badge-id"
name = "Badge ID"
read-only = true

[[modules]]
id = "directory"
name = "Directory"

[[modules.fields]]
id = "nickname"
name = "Nickname"

[[modules]]
id = "billing"
name = "Billing"

[[modules.fields]]
id = "invoice-email"
name = "Invoice Email"
"#;

const CATALOG_JSON: &str = r#"{
  "modules": [
    {
      "id": "profile",
      "name": "Profile",
      "fields": [
        {"id": "nickname", "name": "Nickname", "syncs-to": ["directory:nickname"]},
        {"id": "badge-id", "name": "Badge ID", "read-only": true}
      ]
    },
    {
      "id": "directory",
      "name": "Directory",
      "fields": [{"id": "nickname", "name": "Nickname"}]
    },
    {
      "id": "billing",
      "name": "Billing",
      "fields": [{"id": "invoice-email", "name": "Invoice Email"}]
    }
  ]
}"#;

const CATALOG_YAML: &str = r#"
modules:
  - id: profile
    name: Profile
    fields:
      - id: nickname
        name: Nickname
        syncs-to: ["directory:nickname"]
      - id: badge-id
        name: Badge ID
        read-only: true
  - id: directory
    name: Directory
    fields:
      - id: nickname
        name: Nickname
  - id: billing
    name: Billing
    fields:
      - id: invoice-email
        name: Invoice Email
"#;

#[test]
fn same_catalog_loads_identically_from_all_formats() {
    let dir = TempDir::new().unwrap();
    let toml_path = dir.path().join("catalog.toml");
    let json_path = dir.path().join("catalog.json");
    let yaml_path = dir.path().join("catalog.yaml");
    fs::write(&toml_path, CATALOG_TOML).unwrap();
    fs::write(&json_path, CATALOG_JSON).unwrap();
    fs::write(&yaml_path, CATALOG_YAML).unwrap();

    let from_toml = load_catalog(&toml_path).unwrap();
    let from_json = load_catalog(&json_path).unwrap();
    let from_yaml = load_catalog(&yaml_path).unwrap();

    assert_eq!(from_toml.modules(), from_json.modules());
    assert_eq!(from_toml.modules(), from_yaml.modules());
}

#[test]
fn loaded_catalog_answers_queries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, CATALOG_TOML).unwrap();

    let registry = load_catalog(&path).unwrap();
    let result = query_field(&registry, &FieldKey::new("profile", "nickname")).unwrap();

    assert_eq!(result.sync_targets.len(), 1);
    assert_eq!(result.sync_targets[0].module_name, "Directory");
    assert!(result.unconnected_modules.is_empty());
    assert_eq!(result.absent_modules.len(), 1);
    assert_eq!(result.absent_modules[0].name, "Billing");

    let read_only = query_field(&registry, &FieldKey::new("profile", "badge-id")).unwrap();
    assert!(read_only.is_read_only);
}

#[test]
fn broken_catalog_fails_at_load_not_at_query() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
        [[modules]]
        id = "a"
        name = "A"

        [[modules.fields]]
        id = "x"
        name = "X"
        syncs-to = ["b:x"]
        "#,
    )
    .unwrap();

    // The dangling edge is rejected eagerly; no registry is produced to
    // query against.
    assert!(load_catalog(&path).is_err());
}
