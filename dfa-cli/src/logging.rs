//! CLI logging setup
//!
//! Built on `tracing-subscriber`, with one filter target per phase.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use dfa_config::{LogConfig, Phase};
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::config::{level_for, tracing_level};
use crate::error::CliError;

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Multi-line, colored
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// JSON lines for tooling
    Json,
}

/// Per-phase filter built from the log configuration
pub fn targets(log_config: &LogConfig) -> Targets {
    Targets::new()
        .with_default(tracing_level(log_config.global))
        .with_target(Phase::Build.target(), level_for(log_config, Phase::Build))
        .with_target(Phase::Run.target(), level_for(log_config, Phase::Run))
        .with_target(Phase::Cli.target(), level_for(log_config, Phase::Cli))
}

/// Install the global subscriber.
///
/// Events go to stderr, so stdout only carries verdicts. With `file`, they
/// are also appended to that file without colors.
pub fn init_with_file(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<&Path>,
) -> Result<(), CliError> {
    let targets = targets(log_config);

    let file_layer = match file {
        Some(path) => {
            let handle = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| CliError::LogFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(handle))
                    .with_filter(targets.clone()),
            )
        }
        None => None,
    };

    let console_layer = create_format_layer(format, io::stderr).with_filter(targets);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}
