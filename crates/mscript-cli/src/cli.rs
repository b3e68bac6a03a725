//! CLI argument definitions for the `mscript` tool.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};

/// Output format selection for `settings`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Selects `human` for terminal output and `json` for redirected output.
    #[default]
    Auto,
    /// Always render human-readable output.
    Human,
    /// Always emit JSON.
    Json,
}

/// Output format after resolving `auto` based on TTY detection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedOutputFormat {
    /// Only the fields that differ from the defaults, one per line.
    Human,
    /// A JSON array of settings records.
    Json,
}

impl OutputFormat {
    /// Resolves the output format based on whether stdout is a terminal.
    #[must_use]
    pub const fn resolve(self, stdout_is_terminal: bool) -> ResolvedOutputFormat {
        match self {
            Self::Auto => {
                if stdout_is_terminal {
                    ResolvedOutputFormat::Human
                } else {
                    ResolvedOutputFormat::Json
                }
            }
            Self::Human => ResolvedOutputFormat::Human,
            Self::Json => ResolvedOutputFormat::Json,
        }
    }
}

/// A `NAME=VALUE` pair bound as a script variable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct VariableAssignment {
    pub(crate) name: String,
    pub(crate) value: String,
}

pub(crate) fn parse_variable(raw: &str) -> Result<VariableAssignment, String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok(VariableAssignment {
            name: name.to_owned(),
            value: value.to_owned(),
        }),
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

/// Command-line interface for evaluating Magick Script read settings.
#[derive(Parser, Debug)]
#[command(name = "mscript", version, disable_help_subcommand = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Evaluates every `readSettings` section of a script and prints the
    /// resulting settings.
    Settings {
        /// Path to the script document.
        #[arg(value_name = "SCRIPT")]
        script: Utf8PathBuf,
        /// Binds a script variable; may be repeated.
        #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_variable)]
        variables: Vec<VariableAssignment>,
        /// Controls how settings are rendered.
        #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
        output: OutputFormat,
    },
    /// Lists the recognised `readSettings` directives.
    Directives,
}
