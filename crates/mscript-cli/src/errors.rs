//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use mscript::ScriptError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read script '{path}': {source}")]
    ReadScript {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path}: {source}")]
    Script {
        path: Utf8PathBuf,
        #[source]
        source: ScriptError,
    },
    #[error("failed to serialise settings: {0}")]
    Serialise(#[source] serde_json::Error),
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] io::Error),
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::WriteOutput(error)
    }
}
