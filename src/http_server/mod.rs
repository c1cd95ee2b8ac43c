//! # HTTP Server Module
//!
//! Axum server for the document elements API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/editor/documents/elements[/:element_id]?document_id=..` - Elements
//! - `/editor/documents/:document_id/elements[/:element_id]` - Elements
//! - `/observability/*` - Health and counters

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
