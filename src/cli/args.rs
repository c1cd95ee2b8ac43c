//! CLI argument definitions using clap
//!
//! Commands:
//! - pagedata serve --config <path>
//! - pagedata list --config <path> [--document-id <id>]
//! - pagedata get --config <path> [--document-id <id>] <element_id>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pagedata - element data for page-builder documents
#[derive(Parser, Debug)]
#[command(name = "pagedata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the elements API over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./pagedata.json")]
        config: PathBuf,
    },

    /// Print a document's top-level elements keyed by id
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./pagedata.json")]
        config: PathBuf,

        /// Document to read; omitted prints an empty map
        #[arg(long)]
        document_id: Option<String>,
    },

    /// Print one element found anywhere in a document's tree
    Get {
        /// Path to configuration file
        #[arg(long, default_value = "./pagedata.json")]
        config: PathBuf,

        /// Document to read; omitted prints null
        #[arg(long)]
        document_id: Option<String>,

        /// Element id to search for
        element_id: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
