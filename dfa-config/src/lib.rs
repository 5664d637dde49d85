//! DFA Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all dfa crates.

use serde::{Deserialize, Serialize};

/// What an undefined transition means for an automaton.
///
/// A transition table is allowed to leave `(state, symbol)` pairs out. The
/// completion policy decides, once and for the whole automaton, how such a
/// hole is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    /// Missing pairs lead to an implicit, absorbing, non-accepting sink state.
    #[default]
    Sink,
    /// Missing pairs are an error when a run reaches them.
    Partial,
    /// Missing pairs are rejected when the automaton is constructed.
    Total,
}

impl Completion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Completion::Sink => "sink",
            Completion::Partial => "partial",
            Completion::Total => "total",
        }
    }
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Build,
    Run,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Build => "build",
            Phase::Run => "run",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub const fn target(&self) -> &'static str {
        match self {
            Phase::Build => "dfa::build",
            Phase::Run => "dfa::run",
            Phase::Cli => "dfa::cli",
        }
    }
}

/// Log verbosity, ordered from quietest to noisiest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a user supplied level name. `silent` only lets errors through.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Per-phase log levels
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    pub global: LogLevel,
    #[serde(default)]
    pub build: Option<LogLevel>,
    #[serde(default)]
    pub run: Option<LogLevel>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LogLevel::Warn,
            build: None,
            run: None,
        }
    }
}

impl LogConfig {
    /// Uniform level for every phase
    pub fn with_global(global: LogLevel) -> Self {
        Self {
            global,
            ..Self::default()
        }
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        match phase {
            Phase::Build => self.build.unwrap_or(self.global),
            Phase::Run => self.run.unwrap_or(self.global),
            Phase::Cli => self.global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_completion_is_sink() {
        assert_eq!(Completion::default(), Completion::Sink);
    }

    #[test]
    fn test_completion_serde_lowercase() {
        let json = serde_json::to_string(&Completion::Partial).unwrap();
        assert_eq!(json, "\"partial\"");
        let parsed: Completion = serde_json::from_str("\"total\"").unwrap();
        assert_eq!(parsed, Completion::Total);
        assert_eq!(parsed.as_str(), "total");
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Build.as_str(), "build");
        assert_eq!(Phase::Run.target(), "dfa::run");
        assert_eq!(Phase::Cli.target(), "dfa::cli");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("silent"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::parse("loud"), None);
        assert!(LogLevel::Error < LogLevel::Trace);
    }

    #[test]
    fn test_level_for_falls_back_to_global() {
        let cfg = LogConfig {
            global: LogLevel::Info,
            build: None,
            run: Some(LogLevel::Trace),
        };
        assert_eq!(cfg.level_for(Phase::Build), LogLevel::Info);
        assert_eq!(cfg.level_for(Phase::Run), LogLevel::Trace);
        assert_eq!(cfg.level_for(Phase::Cli), LogLevel::Info);
    }

    #[test]
    fn test_log_config_deserialize_partial() {
        let cfg: LogConfig = serde_json::from_str(r#"{ "global": "debug" }"#).unwrap();
        assert_eq!(cfg, LogConfig::with_global(LogLevel::Debug));
    }
}
