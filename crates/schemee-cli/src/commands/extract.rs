//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::Formatter;
use crate::Registry;
use schemee_sdk::{ExtractorConfig, FileStore, MissingFieldPolicy};
use tracing::debug;

/// Execute the extract command.
///
/// Command-line flags override the configured extraction settings for this run only.
pub fn execute_extract(
    args: ExtractArgs,
    store: FileStore,
    config: &ExtractorConfig,
    formatter: &Formatter,
) -> Result<()> {
    let config = effective_config(&args, config);
    debug!("Extracting with {:?}", config);

    let registry = Registry::with_store(store, config)?;
    let document = read_input(args.file.as_deref())?;
    let value = registry.extract(&args.name, &document)?;

    println!("{}", formatter.format_value(&value)?);
    Ok(())
}

fn effective_config(args: &ExtractArgs, base: &ExtractorConfig) -> ExtractorConfig {
    let mut config = base.clone();
    if args.lenient {
        config.missing_field = MissingFieldPolicy::Skip;
    }
    if let Some(max_items) = args.max_items {
        config.max_list_items = max_items;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(lenient: bool, max_items: Option<usize>) -> ExtractArgs {
        ExtractArgs {
            name: "x".to_string(),
            file: None,
            lenient,
            max_items,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let base = ExtractorConfig::default();
        let config = effective_config(&args(true, Some(3)), &base);

        assert_eq!(config.missing_field, MissingFieldPolicy::Skip);
        assert_eq!(config.max_list_items, 3);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let base = ExtractorConfig::lenient();
        assert_eq!(effective_config(&args(false, None), &base), base);
    }
}
