//! Inspect command: the three-list view for a selected field

use std::path::Path;

use colored::Colorize;

use fieldsync_query::{Error as QueryError, SyncQueryResult, query_field};
use fieldsync_registry::FieldKey;

use crate::commands::load_registry;
use crate::error::Result;

/// Run the inspect command
pub fn run_inspect(catalog: Option<&Path>, raw: &str, json: bool) -> Result<()> {
    let registry = load_registry(catalog)?;
    let selected: FieldKey = raw.parse()?;

    let (module, field) = registry
        .resolve(&selected)
        .ok_or_else(|| QueryError::UnknownField {
            key: selected.clone(),
        })?;
    let result = query_field(&registry, &selected)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.is_read_only {
        println!(
            "{} This field is read-only in {}; you cannot edit it here.",
            "warning:".yellow().bold(),
            module.name.bold()
        );
        return Ok(());
    }

    println!(
        "When you update {} in {}:",
        format!("\"{}\"", field.name).bold(),
        module.name.bold()
    );
    print_lists(&result);

    Ok(())
}

fn print_lists(result: &SyncQueryResult) {
    let updates = result
        .sync_targets
        .iter()
        .map(|t| format!("{} → {}", t.module_name, t.field_name))
        .collect::<Vec<_>>();
    let unconnected = result
        .unconnected_modules
        .iter()
        .map(|m| m.name.clone())
        .collect::<Vec<_>>();
    let absent = result
        .absent_modules
        .iter()
        .map(|m| m.name.clone())
        .collect::<Vec<_>>();

    println!("  {} {}", "System updates →".green().bold(), join(&updates));
    println!(
        "  {} {}",
        "Field exists but is NOT connected →".red().bold(),
        join(&unconnected)
    );
    println!(
        "  {} {}",
        "Field is NOT part of →".dimmed().bold(),
        join(&absent)
    );
}

fn join(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}
