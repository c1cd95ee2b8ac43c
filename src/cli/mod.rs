//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP elements API
//! - list: One-shot listing of a document's top-level elements
//! - get: One-shot lookup of a single element

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{get, list, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
