//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};

/// Schemee CLI - Learn blueprints from annotated samples and extract data with them.
#[derive(Debug, Parser)]
#[command(name = "schemee")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Blueprint directory (overrides the configured one)
    #[arg(short, long, global = true, env = "SCHEMEE_STORE")]
    pub store: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (compact JSON, names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile an annotated sample into a named blueprint
    Compile(CompileArgs),

    /// Extract data from a document with a blueprint
    Extract(ExtractArgs),

    /// List registered blueprints
    List,

    /// Show the fields and addresses of a blueprint
    Show(ShowArgs),

    /// Remove blueprints
    Remove(RemoveArgs),

    /// Print a sample with every annotation removed
    Strip(StripArgs),
}

/// Arguments for the compile command.
#[derive(Debug, Parser)]
pub struct CompileArgs {
    /// Blueprint name
    pub name: String,

    /// Annotated sample file (reads stdin when absent)
    #[arg(short = 'i', long)]
    pub file: Option<String>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Blueprint name
    pub name: String,

    /// Document file (reads stdin when absent)
    #[arg(short = 'i', long)]
    pub file: Option<String>,

    /// Skip fields that cannot be found instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Maximum items collected per list
    #[arg(long)]
    pub max_items: Option<usize>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Blueprint name
    pub name: String,
}

/// Arguments for the remove command.
#[derive(Debug, Parser)]
pub struct RemoveArgs {
    /// Blueprint names to remove
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the strip command.
#[derive(Debug, Parser)]
pub struct StripArgs {
    /// Annotated sample file (reads stdin when absent)
    #[arg(short = 'i', long)]
    pub file: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
