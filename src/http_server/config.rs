//! HTTP Server Configuration
//!
//! Bind address, mount path of the documents resource, and CORS origins.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Default mount path of the parent documents resource
pub const DEFAULT_DOCUMENTS_PATH: &str = "/editor/documents";

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 54321)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Where the documents resource is mounted (default: "/editor/documents")
    #[serde(default = "default_documents_path")]
    pub documents_path: String,

    /// CORS allowed origins; empty allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    54321
}

fn default_documents_path() -> String {
    DEFAULT_DOCUMENTS_PATH.to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(), // admin panel dev server
        "http://127.0.0.1:5173".to_string(),
    ]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            documents_path: default_documents_path(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Parse the bind address
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }

    /// Check the settings that cannot be defaulted
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        if !self.documents_path.starts_with('/') || self.documents_path.ends_with('/') {
            return Err(format!(
                "documents_path must start with '/' and not end with '/': '{}'",
                self.documents_path
            ));
        }
        self.socket_addr().map(|_| ())
    }
}
