//! Strip command implementation.

use crate::cli::StripArgs;
use crate::commands::read_input;
use crate::error::Result;
use schemee_sdk::strip_annotations;

/// Execute the strip command.
pub fn execute_strip(args: StripArgs) -> Result<()> {
    let sample = read_input(args.file.as_deref())?;
    print!("{}", strip_annotations(&sample)?);
    Ok(())
}
