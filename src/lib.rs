//! pagedata - element data for page-builder documents
//!
//! Serves the `elements` sub-endpoint of a documents resource: a document's
//! top-level elements keyed by id, or a single element found anywhere in its
//! nested tree.

pub mod cli;
pub mod documents;
pub mod elements;
pub mod http_server;
pub mod observability;
pub mod rest_api;
