//! Command-line runtime for the `mscript` tool.
//!
//! The runtime splits configuration flags from command tokens, loads layered
//! configuration, installs telemetry and then evaluates the requested
//! command. IO streams and the configuration loader are injectable so the
//! runtime can be driven from tests.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::process::ExitCode;

use camino::Utf8Path;
use clap::Parser;
use clap::error::ErrorKind;
use mscript::{Script, ScriptError, read_settings_registry};
use mscript_core::ReadSettings;
use tracing::{debug, info};

mod cli;
mod config;
mod errors;
mod output;
mod telemetry;

pub use cli::{OutputFormat, ResolvedOutputFormat};
use cli::{Cli, CliCommand, VariableAssignment};
use config::{ConfigLoader, OrthoConfigLoader, split_config_arguments};
use errors::AppError;

const CLI_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::cli");

/// Runs the CLI using the provided arguments and IO handles.
///
/// Returns [`ExitCode::FAILURE`] after writing the error to `stderr` when
/// any step fails.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E, stdout_is_terminal: bool) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdout, stderr, stdout_is_terminal, &OrthoConfigLoader)
}

pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    stdout: &mut W,
    stderr: &mut E,
    stdout_is_terminal: bool,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let arguments: Vec<OsString> = args.into_iter().collect();
    let split = split_config_arguments(&arguments);

    let cli = match Cli::try_parse_from(split.command_arguments.iter().cloned()) {
        Ok(cli) => cli,
        Err(error) if is_informational(&error) => {
            return match write!(stdout, "{error}") {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(error) => return report(stderr, &AppError::CliUsage(error)),
    };

    let result = loader
        .load(&split.config_arguments)
        .and_then(|config| telemetry::initialise(&config).map_err(AppError::from))
        .and_then(|()| execute(cli.command, stdout, stdout_is_terminal));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(stderr, &error),
    }
}

fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

fn report<E: Write>(stderr: &mut E, error: &AppError) -> ExitCode {
    let _ = writeln!(stderr, "{error}");
    ExitCode::FAILURE
}

fn execute<W: Write>(
    command: CliCommand,
    stdout: &mut W,
    stdout_is_terminal: bool,
) -> Result<(), AppError> {
    match command {
        CliCommand::Settings {
            script,
            variables,
            output,
        } => {
            let sections = evaluate_script(&script, variables)?;
            match output.resolve(stdout_is_terminal) {
                ResolvedOutputFormat::Json => output::render_json(stdout, &sections),
                ResolvedOutputFormat::Human => output::render_human(stdout, &sections),
            }
        }
        CliCommand::Directives => {
            for name in read_settings_registry().directive_names() {
                writeln!(stdout, "{name}")?;
            }
            Ok(())
        }
    }
}

/// Loads the script at `path`, binds the variables and builds one settings
/// record per `readSettings` section.
fn evaluate_script(
    path: &Utf8Path,
    variables: Vec<VariableAssignment>,
) -> Result<Vec<ReadSettings>, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ReadScript {
        path: path.to_owned(),
        source,
    })?;
    let script_error = |source: ScriptError| AppError::Script {
        path: path.to_owned(),
        source,
    };

    let mut script = Script::parse(&text).map_err(script_error)?;
    script.variables_mut().extend(
        variables
            .into_iter()
            .map(|assignment| (assignment.name, assignment.value)),
    );
    debug!(
        target: CLI_TARGET,
        script = %path,
        variables = script.variables().len(),
        "script loaded"
    );

    let sections = script
        .read_settings_sections()
        .map(|section| {
            script
                .build_read_settings(section, None)
                .map_err(|error| script_error(error.into()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        target: CLI_TARGET,
        script = %path,
        sections = sections.len(),
        "read settings evaluated"
    );
    Ok(sections)
}

#[cfg(test)]
mod tests;
