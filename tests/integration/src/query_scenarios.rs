//! End-to-end query scenarios over the registry and query engine

use fieldsync_query::{CellStatus, cell_status, query_field, status_map};
use fieldsync_registry::{FieldKey, Registry};
use fieldsync_test_utils::{linear_catalog, registry, unlinked_catalog};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn scenario_sync_target_and_absent_module() {
    // A={x syncing to B:x}, B={x}, C={}
    let registry = registry(linear_catalog());
    let result = query_field(&registry, &FieldKey::new("a", "x")).unwrap();

    assert_eq!(result.sync_targets.len(), 1);
    assert_eq!(result.sync_targets[0].key(), FieldKey::new("b", "x"));
    assert!(result.unconnected_modules.is_empty());
    assert_eq!(result.absent_modules.len(), 1);
    assert_eq!(result.absent_modules[0].id, "c");
}

#[test]
fn scenario_same_field_unlinked() {
    // A={x}, B={x}, no edges
    let registry = registry(unlinked_catalog());
    let result = query_field(&registry, &FieldKey::new("a", "x")).unwrap();

    assert!(result.sync_targets.is_empty());
    assert_eq!(result.unconnected_modules.len(), 1);
    assert_eq!(result.unconnected_modules[0].id, "b");
    assert!(result.absent_modules.is_empty());
}

#[rstest]
#[case("edit-profile", "email")]
#[case("notifications", "work-email")]
fn scenario_read_only_is_terminal(#[case] module_id: &str, #[case] field_id: &str) {
    let registry = Registry::builtin();
    let result = query_field(&registry, &FieldKey::new(module_id, field_id)).unwrap();

    assert!(result.is_read_only);
    assert!(result.sync_targets.is_empty());
    assert!(result.unconnected_modules.is_empty());
    assert!(result.absent_modules.is_empty());
}

#[test]
fn scenario_unknown_selection_is_an_error() {
    let registry = Registry::builtin();
    let result = query_field(&registry, &FieldKey::new("edit-profile", "nope"));
    assert!(result.is_err());

    let result = query_field(&registry, &FieldKey::new("no-such-module", "email"));
    assert!(result.is_err());
}

/// Every non-read-only field of the built-in catalog partitions the other
/// modules across targets, unconnected, and absent, with linked modules
/// never reported as unconnected.
#[test]
fn builtin_catalog_buckets_are_consistent() {
    let registry = Registry::builtin();

    for key in registry.field_keys() {
        let result = query_field(&registry, &key).unwrap();
        if result.is_read_only {
            continue;
        }

        for module in registry.modules() {
            if module.id == key.module_id {
                continue;
            }
            let is_target = result.sync_targets.iter().any(|t| t.module_id == module.id);
            let is_unconnected = result
                .unconnected_modules
                .iter()
                .any(|m| m.id == module.id);
            let is_absent = result.absent_modules.iter().any(|m| m.id == module.id);

            assert!(
                is_target || is_unconnected || is_absent,
                "{}: module {} in no bucket",
                key,
                module.id
            );
            // Target and unconnected are mutually exclusive by
            // construction; absent may overlap target when the edge
            // renames the field.
            assert!(
                !(is_target && is_unconnected),
                "{}: module {} both target and unconnected",
                key,
                module.id
            );
            assert!(
                !(is_unconnected && is_absent),
                "{}: module {} both unconnected and absent",
                key,
                module.id
            );
        }
    }
}

#[test]
fn builtin_display_name_updates_both_portals() {
    let registry = Registry::builtin();
    let selected = FieldKey::new("edit-profile", "display-name");
    let result = query_field(&registry, &selected).unwrap();

    let target_names: Vec<&str> = result
        .sync_targets
        .iter()
        .map(|t| t.module_name.as_str())
        .collect();
    assert_eq!(
        target_names,
        vec!["Notification Preferences Portal", "Profile Preferences Dataset"]
    );
    assert!(result.unconnected_modules.is_empty());
    assert!(result.absent_modules.is_empty());
}

#[test]
fn status_map_covers_whole_registry_per_selection() {
    let registry = Registry::builtin();
    let selected = FieldKey::new("notifications", "language");
    let result = query_field(&registry, &selected).unwrap();

    let map = status_map(&registry, &selected, &result);
    assert_eq!(map.len(), registry.len());

    // language has no edges from notifications; edit-profile carries the
    // same field id, profile-dataset lacks it.
    let status_of = |module: &str, field: &str| {
        map.iter()
            .find(|(k, _)| k == &FieldKey::new(module, field))
            .map(|(_, s)| *s)
            .unwrap()
    };
    assert_eq!(status_of("notifications", "language"), Some(CellStatus::Source));
    assert_eq!(status_of("edit-profile", "language"), Some(CellStatus::Unlinked));
    assert_eq!(status_of("edit-profile", "full-name"), None);
}

#[test]
fn repeated_queries_are_structurally_identical() {
    let registry = Registry::builtin();
    for key in registry.field_keys() {
        let first = query_field(&registry, &key).unwrap();
        let second = query_field(&registry, &key).unwrap();
        assert_eq!(first, second, "selection {key}");

        let map_a = status_map(&registry, &key, &first);
        let map_b = status_map(&registry, &key, &second);
        assert_eq!(map_a, map_b);
    }
}

#[test]
fn cell_status_total_over_all_pairs() {
    let registry = Registry::builtin();
    let keys: Vec<FieldKey> = registry.field_keys().collect();

    for selected in &keys {
        let result = query_field(&registry, selected).unwrap();
        for cell in &keys {
            // Must never panic, whatever the pair.
            let _ = cell_status(selected, &result, cell);
        }
    }
}
