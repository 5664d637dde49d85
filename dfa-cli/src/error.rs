//! CLI error type

use std::path::PathBuf;

use dfa_core::{InvalidAutomaton, RunError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse automaton description: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid automaton: {0}")]
    Invalid(#[from] InvalidAutomaton<String, String>),

    #[error("{0}")]
    Run(#[from] RunError<String, String>),

    #[error("cannot open log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot install logger: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl CliError {
    /// Stage the error belongs to
    pub fn phase(&self) -> &'static str {
        match self {
            CliError::Read { .. } | CliError::Parse(_) => "load",
            CliError::Invalid(_) => "build",
            CliError::Run(_) => "run",
            CliError::LogFile { .. } | CliError::Logging(_) => "logging",
        }
    }
}
