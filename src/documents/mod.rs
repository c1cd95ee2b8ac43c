//! # Documents
//!
//! Read-only view of host documents: the element tree data model and the
//! registry capability used to resolve a document by id.

mod directory;
mod document;
mod element;
mod errors;
mod registry;

pub use directory::DirectoryDocumentRegistry;
pub use document::{Document, DocumentId};
pub use element::Element;
pub use errors::{DocumentError, DocumentResult};
pub use registry::{DocumentRegistry, InMemoryDocumentRegistry};
