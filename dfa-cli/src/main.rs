//! dfa - evaluate words against a deterministic finite automaton
//!
//! The automaton comes from a JSON description (see `description.rs`), or
//! the bundled "a's before b's" automaton when none is given.

use clap::Parser;
use std::path::PathBuf;
use std::process;

mod config;
mod description;
mod error;
mod input;
mod logging;
mod platform;

use dfa_config::{LogConfig, LogLevel, Phase};
use dfa_core::Automaton;
use tracing::{debug, info};

use crate::config::parse_level;
use crate::description::Description;
use crate::error::CliError;
use crate::input::tokenize;
use crate::logging::LogFormat;

const TARGET: &str = Phase::Cli.target();

#[derive(Parser)]
#[command(
    name = "dfa",
    about = "Decide whether words belong to the language of a DFA",
    version
)]
struct Cli {
    /// Automaton description (JSON). Defaults to the bundled "a's before b's" automaton
    #[arg(short, long, value_name = "FILE")]
    automaton: Option<PathBuf>,

    /// Split each input on SEP instead of taking one symbol per character
    #[arg(short, long, value_name = "SEP")]
    separator: Option<String>,

    /// Print the states visited by each input
    #[arg(long)]
    trace: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "warn", value_parser = parse_level)]
    log_level: LogLevel,

    /// Log level for automaton construction (defaults to --log-level)
    #[arg(long, value_name = "LEVEL", value_parser = parse_level)]
    log_build: Option<LogLevel>,

    /// Log level for evaluation (defaults to --log-level)
    #[arg(long, value_name = "LEVEL", value_parser = parse_level)]
    log_run: Option<LogLevel>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append log events to FILE
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Words to evaluate
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        LogConfig {
            global: self.log_level,
            build: self.log_build,
            run: self.log_run,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_with_file(&cli.log_config(), cli.log_format, cli.log_file.as_deref()) {
        platform::print_error(&e);
        process::exit(1);
    }

    match execute(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            platform::print_error(&e);
            process::exit(1);
        }
    }
}

/// Evaluate every input. `Ok(false)` when at least one input failed to run.
fn execute(cli: &Cli) -> Result<bool, CliError> {
    let automaton = load_automaton(cli)?;
    let separator = cli.separator.as_deref();

    let mut all_ok = true;
    for word in &cli.inputs {
        let tokens = tokenize(word, separator);
        match evaluate(&automaton, &tokens, cli.trace) {
            Ok((accepted, path)) => {
                platform::print_verdict(word, accepted);
                if let Some(path) = path {
                    println!("  {path}");
                }
            }
            Err(CliError::Run(e)) => {
                platform::print_run_error(word, &tokens, separator.unwrap_or(""), &e);
                all_ok = false;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(all_ok)
}

fn load_automaton(cli: &Cli) -> Result<Automaton<String, String>, CliError> {
    let description = match &cli.automaton {
        Some(path) => {
            info!(target: TARGET, path = %path.display(), "loading automaton description");
            Description::load(path)?
        }
        None => {
            debug!(target: TARGET, "using bundled automaton");
            Description::bundled()?
        }
    };
    Ok(description.build()?)
}

/// Verdict for one tokenized input, plus the rendered path when tracing
fn evaluate(
    automaton: &Automaton<String, String>,
    tokens: &[String],
    trace: bool,
) -> Result<(bool, Option<String>), CliError> {
    if trace {
        let path = automaton.trace(tokens)?;
        let accepted = match path.last().and_then(|loc| loc.state()) {
            Some(state) => automaton.is_accepting(state),
            None => false,
        };
        Ok((accepted, Some(platform::format_path(&path))))
    } else {
        Ok((automaton.run(tokens)?, None))
    }
}
