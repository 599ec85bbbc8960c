//! Check command: validate a catalog file

use std::path::Path;

use colored::Colorize;

use fieldsync_registry::load_catalog;

use crate::error::Result;

/// Run the check command
pub fn run_check(path: &Path) -> Result<()> {
    let registry = load_catalog(path)?;

    let edges: usize = registry
        .modules()
        .iter()
        .flat_map(|m| &m.fields)
        .map(|f| f.syncs_to.len())
        .sum();

    println!(
        "{} {} — {} modules, {} fields, {} sync edges",
        "ok".green().bold(),
        path.display(),
        registry.modules().len(),
        registry.len(),
        edges
    );

    Ok(())
}
