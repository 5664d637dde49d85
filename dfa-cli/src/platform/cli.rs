//! CLI formatted output
//!
//! Verdicts go to stdout, errors to stderr with a marker under the symbol
//! that stopped the run.

use dfa_core::{Location, RunError};

use crate::error::CliError;

pub fn print_verdict(input: &str, accepted: bool) {
    let verdict = if accepted { "accepted" } else { "rejected" };
    println!("{input:?}: {verdict}");
}

/// Render a walk as `q0 -> q1 -> sink`
pub fn format_path(path: &[Location<'_, String>]) -> String {
    path.iter()
        .map(|loc| match loc {
            Location::State(s) => s.as_str(),
            Location::Sink => "sink",
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn print_error(e: &CliError) {
    eprintln!("error[{}]: {}", e.phase(), e);
}

/// Print a run error followed by the input with the offending symbol marked.
pub fn print_run_error(input: &str, tokens: &[String], separator: &str, e: &RunError<String, String>) {
    eprintln!("error[run]: {input:?}: {e}");
    if let Some((line, marker)) = run_error_context(tokens, separator, e.index()) {
        eprintln!("  | {line}");
        eprintln!("  | {marker}");
    }
}

/// The tokens joined by `separator`, and a line of carets under token `index`
pub fn run_error_context(tokens: &[String], separator: &str, index: usize) -> Option<(String, String)> {
    let token = tokens.get(index)?;
    let offset: usize = tokens[..index]
        .iter()
        .map(|t| t.chars().count() + separator.chars().count())
        .sum();
    let width = token.chars().count().max(1);
    let marker = " ".repeat(offset) + &"^".repeat(width);
    Some((tokens.join(separator), marker))
}
