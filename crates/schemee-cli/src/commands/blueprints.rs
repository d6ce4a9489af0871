//! Blueprint registry commands: list, show and remove.

use crate::cli::{RemoveArgs, ShowArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::Registry;
use std::io::{self, Write};

/// Execute the list command.
pub fn execute_list(registry: &Registry, formatter: &Formatter) -> Result<()> {
    let names = registry.blueprint_names()?;
    println!("{}", formatter.format_names(&names)?);
    Ok(())
}

/// Execute the show command.
pub fn execute_show(args: ShowArgs, registry: &Registry, formatter: &Formatter) -> Result<()> {
    let blueprint = registry
        .blueprint(&args.name)?
        .ok_or_else(|| CliError::NotFound(args.name.clone()))?;

    println!("{}", formatter.format_blueprint(&blueprint)?);
    Ok(())
}

/// Execute the remove command.
pub fn execute_remove(args: RemoveArgs, registry: &mut Registry, formatter: &Formatter) -> Result<()> {
    // Confirm deletion unless --yes is specified
    if !args.yes {
        println!("About to remove {} blueprint(s):", args.names.len());
        for name in &args.names {
            println!("  - {}", name);
        }
        print!("Continue? [y/N] ");
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if !response.trim().eq_ignore_ascii_case("y") {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    let removed = remove_all(registry, &args.names)?;
    if removed == args.names.len() {
        println!("{}", formatter.success(&format!("Removed {} blueprint(s)", removed)));
    } else {
        println!(
            "{}",
            formatter.warning(&format!(
                "Removed {} of {} blueprint(s); the rest did not exist",
                removed,
                args.names.len()
            ))
        );
    }

    Ok(())
}

/// Remove every named blueprint, returning how many existed.
fn remove_all(registry: &mut Registry, names: &[String]) -> Result<usize> {
    let mut removed = 0;
    for name in names {
        if registry.remove_blueprint(name)? {
            removed += 1;
        }
    }
    Ok(removed)
}
