//! # Directory Document Registry
//!
//! Reads documents from `<root>/<document_id>.json`. Every `get` reads the
//! file again; there is no cache.
//!
//! A file may hold a full document object or a bare array of elements.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use super::document::{Document, DocumentId};
use super::element::Element;
use super::errors::{DocumentError, DocumentResult};
use super::registry::DocumentRegistry;

/// Stored file layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Full(Document),
    Elements(Vec<Element>),
}

fn document_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid document id pattern"))
}

/// Registry backed by a directory of JSON files
#[derive(Debug, Clone)]
pub struct DirectoryDocumentRegistry {
    root: PathBuf,
}

impl DirectoryDocumentRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding a document
    ///
    /// Ids are restricted to `[A-Za-z0-9_-]` so they can never escape `root`.
    pub fn document_path(&self, id: &DocumentId) -> DocumentResult<PathBuf> {
        if !document_id_pattern().is_match(id.as_str()) {
            return Err(DocumentError::InvalidId(id.to_string()));
        }
        Ok(self.root.join(format!("{}.json", id)))
    }
}

impl DocumentRegistry for DirectoryDocumentRegistry {
    fn get(&self, id: &DocumentId) -> DocumentResult<Document> {
        let path = self.document_path(id)?;

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DocumentError::NotFound(id.clone()),
            _ => DocumentError::Io(id.clone(), e.to_string()),
        })?;

        let stored: StoredDocument = serde_json::from_str(&content)
            .map_err(|e| DocumentError::Malformed(id.clone(), e.to_string()))?;

        let mut document = match stored {
            StoredDocument::Full(document) => document,
            StoredDocument::Elements(elements) => Document::new(id.clone(), elements),
        };
        if document.id.is_empty() {
            document.id = id.clone();
        }

        Ok(document)
    }
}
