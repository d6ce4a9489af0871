//! Compile command implementation.

use crate::cli::CompileArgs;
use crate::commands::read_input;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::Registry;

/// Execute the compile command.
pub fn execute_compile(args: CompileArgs, registry: &mut Registry, formatter: &Formatter) -> Result<()> {
    let sample = read_input(args.file.as_deref())?;
    if sample.trim().is_empty() {
        return Err(CliError::InvalidInput("Sample is empty".to_string()));
    }

    registry.compile_blueprint(&args.name, &sample)?;

    let fields = registry
        .blueprint(&args.name)?
        .map(|blueprint| blueprint.field_count())
        .unwrap_or(0);
    println!("{}", formatter.blueprint_compiled(&args.name, fields));

    Ok(())
}
