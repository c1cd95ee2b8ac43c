//! CLI command implementations
//!
//! `list` and `get` are one-shot reads that print a JSON envelope to stdout.
//! `serve` runs the HTTP server until the process is stopped.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::documents::{DirectoryDocumentRegistry, DocumentId, DocumentRegistry};
use crate::elements::ElementLookup;
use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `<document_id>.json` files (required)
    pub documents_dir: String,

    /// HTTP settings, inlined at the top level of the file
    #[serde(flatten)]
    pub server: HttpServerConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.documents_dir.trim().is_empty() {
            return Err(CliError::config_error("documents_dir must not be empty"));
        }

        self.server.validate().map_err(CliError::config_error)?;

        Ok(())
    }

    /// Get documents directory as Path
    pub fn documents_path(&self) -> &Path {
        Path::new(&self.documents_dir)
    }

    /// Registry reading from the configured directory
    pub fn registry(&self) -> Arc<dyn DocumentRegistry> {
        Arc::new(DirectoryDocumentRegistry::new(self.documents_path()))
    }
}

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(&config),
        Command::List {
            config,
            document_id,
        } => report(list(&config, document_id)),
        Command::Get {
            config,
            document_id,
            element_id,
        } => report(get(&config, document_id, &element_id)),
    }
}

/// Print a one-shot failure as a JSON envelope before returning it
fn report(result: CliResult<()>) -> CliResult<()> {
    if let Err(e) = &result {
        write_error(e.code_str(), e.message())?;
    }
    result
}

/// Print a document's top-level elements keyed by id
pub fn list(config_path: &Path, document_id: Option<String>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let lookup = ElementLookup::new(config.registry());

    let document_id = document_id.map(DocumentId::from);
    let elements = lookup.list_elements(document_id.as_ref())?;

    write_response(&elements)
}

/// Print one element, or null when nothing matches
pub fn get(config_path: &Path, document_id: Option<String>, element_id: &str) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let lookup = ElementLookup::new(config.registry());

    let document_id = document_id.map(DocumentId::from);
    let element = lookup.get_element(element_id, document_id.as_ref())?;

    write_response(&element)
}

/// Serve the elements API over HTTP
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    if !config.documents_path().is_dir() {
        return Err(CliError::config_error(format!(
            "documents_dir is not a directory: {}",
            config.documents_dir
        )));
    }

    let server = HttpServer::with_config(config.server.clone(), config.registry());

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}
