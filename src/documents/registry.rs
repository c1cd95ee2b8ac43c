//! # Document Registry
//!
//! Resolves document ids to documents. The registry is handed to the element
//! lookup explicitly; nothing reaches for a process-wide instance.

use std::collections::HashMap;
use std::sync::RwLock;

use super::document::{Document, DocumentId};
use super::errors::{DocumentError, DocumentResult};

/// Capability to resolve a document by id
///
/// Implementations may block (e.g. read from disk). Failures are reported
/// as `DocumentError` and are surfaced to callers unchanged.
pub trait DocumentRegistry: Send + Sync {
    /// Resolve a document by id
    fn get(&self, id: &DocumentId) -> DocumentResult<Document>;
}

/// Registry holding documents in memory
#[derive(Debug, Default)]
pub struct InMemoryDocumentRegistry {
    documents: RwLock<HashMap<DocumentId, Document>>,
}

impl InMemoryDocumentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry preloaded with documents
    pub fn with_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let map = documents
            .into_iter()
            .map(|doc| (doc.id.clone(), doc))
            .collect();
        Self {
            documents: RwLock::new(map),
        }
    }

    /// Insert or replace a document
    pub fn insert(&self, document: Document) -> DocumentResult<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| DocumentError::Internal("Lock poisoned".into()))?;
        documents.insert(document.id.clone(), document);
        Ok(())
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentRegistry for InMemoryDocumentRegistry {
    fn get(&self, id: &DocumentId) -> DocumentResult<Document> {
        let documents = self
            .documents
            .read()
            .map_err(|_| DocumentError::Internal("Lock poisoned".into()))?;
        documents
            .get(id)
            .cloned()
            .ok_or_else(|| DocumentError::NotFound(id.clone()))
    }
}
