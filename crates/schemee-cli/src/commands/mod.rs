//! Command implementations.

pub mod blueprints;
pub mod compile;
pub mod extract;
pub mod strip;

pub use self::blueprints::{execute_list, execute_remove, execute_show};
pub use self::compile::execute_compile;
pub use self::extract::execute_extract;
pub use self::strip::execute_strip;

use crate::error::Result;
use std::fs;
use std::io::{self, Read};

/// Read a whole input: the named file, or stdin when no file (or `-`) is given.
pub(crate) fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) if path != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
