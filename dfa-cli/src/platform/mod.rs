//! Terminal output

mod cli;

pub use cli::{format_path, print_error, print_run_error, print_verdict, run_error_context};
