//! CLI configuration
//!
//! Maps the shared log vocabulary onto `tracing` levels.

use dfa_config::{LogConfig, LogLevel, Phase};
use tracing::Level;

pub fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// `tracing` level for a specific phase
pub fn level_for(log_config: &LogConfig, phase: Phase) -> Level {
    tracing_level(log_config.level_for(phase))
}

/// clap value parser for level names
pub fn parse_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| {
        format!("unknown log level '{s}' (expected silent, error, warn, info, debug or trace)")
    })
}
