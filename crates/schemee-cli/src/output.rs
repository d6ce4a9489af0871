//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use schemee_domain::{Blueprint, Token, TokenKind};
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

/// One row of a blueprint listing
struct FieldRow {
    path: String,
    kind: &'static str,
    address: String,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an extraction result.
    pub fn format_value(&self, value: &Value) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Quiet => Ok(serde_json::to_string(value)?),
            OutputFormat::Table => Ok(self.format_value_table(value)),
        }
    }

    /// Format an extraction result as a table of leaf paths.
    fn format_value_table(&self, value: &Value) -> String {
        let leaves = flatten(value);
        if leaves.is_empty() {
            return self.colorize("No values extracted.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Path", "Value"]);
        for (path, leaf) in leaves {
            builder.push_record([path, leaf]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a blueprint's fields.
    pub fn format_blueprint(&self, blueprint: &Blueprint) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(blueprint)?);
        }

        let rows = field_rows(&blueprint.root);
        if self.format == OutputFormat::Quiet {
            let paths: Vec<&str> = rows.iter().map(|row| row.path.as_str()).collect();
            return Ok(paths.join("\n"));
        }

        if rows.is_empty() {
            return Ok(self.colorize(&format!("Blueprint '{}' has no fields.", blueprint.name), "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Field", "Kind", "Address"]);
        for row in &rows {
            builder.push_record([row.path.as_str(), row.kind, row.address.as_str()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(format!(
            "{}\n{}",
            self.colorize(&blueprint.name, "cyan"),
            table
        ))
    }

    /// Format a list of blueprint names.
    pub fn format_names(&self, names: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(names)?),
            OutputFormat::Quiet => Ok(names.join("\n")),
            OutputFormat::Table => {
                if names.is_empty() {
                    return Ok(self.colorize("No blueprints found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Blueprint"]);
                for name in names {
                    builder.push_record([name.as_str()]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a compile result.
    pub fn blueprint_compiled(&self, name: &str, fields: usize) -> String {
        self.success(&format!("Blueprint '{}' compiled ({} fields)", name, fields))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Leaf values of `value` with their `a.b[0].c` paths, in document order.
fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut leaves = Vec::new();
    let mut stack = vec![(String::new(), value)];

    while let Some((path, value)) = stack.pop() {
        match value {
            Value::Object(map) => {
                for (key, child) in map.iter().rev() {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", path, key)
                    };
                    stack.push((child_path, child));
                }
            }
            Value::Array(items) => {
                for (i, child) in items.iter().enumerate().rev() {
                    stack.push((format!("{}[{}]", path, i), child));
                }
            }
            Value::String(text) => leaves.push((path, text.clone())),
            other => leaves.push((path, other.to_string())),
        }
    }

    leaves
}

/// Fields of a token tree with `list[].field` paths, in declared order.
fn field_rows(root: &Token) -> Vec<FieldRow> {
    let mut rows = Vec::new();
    let mut stack: Vec<(String, &Token)> = root
        .children
        .iter()
        .rev()
        .map(|child| (String::new(), child))
        .collect();

    while let Some((prefix, token)) = stack.pop() {
        let mut path = if prefix.is_empty() {
            token.name_str().to_string()
        } else {
            format!("{}.{}", prefix, token.name_str())
        };
        if token.kind == TokenKind::ListStart {
            path.push_str("[]");
        }

        let address = match &token.relative_address {
            Some(address) if address.is_empty() => "(anchor)".to_string(),
            Some(address) => address.to_string(),
            None => "-".to_string(),
        };

        for child in token.children.iter().rev() {
            stack.push((path.clone(), child));
        }

        rows.push(FieldRow {
            path,
            kind: token.kind.as_str(),
            address,
        });
    }

    rows
}
