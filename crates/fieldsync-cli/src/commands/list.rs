//! List command: modules and their fields

use std::path::Path;

use colored::Colorize;

use crate::commands::load_registry;
use crate::error::Result;

/// Run the list command
pub fn run_list(catalog: Option<&Path>) -> Result<()> {
    let registry = load_registry(catalog)?;

    for module in registry.modules() {
        println!(
            "{} {}",
            module.name.bold(),
            format!("({})", module.id).dimmed()
        );
        for field in &module.fields {
            let marker = if field.read_only {
                " [read-only]".yellow().to_string()
            } else if field.syncs_to.is_empty() {
                format!(" {}", "(no syncs)".dimmed())
            } else {
                let n = field.syncs_to.len();
                format!(" {}", format!("({} sync{})", n, if n > 1 { "s" } else { "" }).dimmed())
            };
            println!("  {:<18} {}{}", field.id.green(), field.name, marker);
        }
        println!();
    }

    println!(
        "{} {} modules, {} fields. Use {} to trace a field.",
        "Total:".dimmed(),
        registry.modules().len(),
        registry.len(),
        "fieldsync inspect <module:field>".cyan()
    );

    Ok(())
}
