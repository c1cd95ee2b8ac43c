//! # Document Errors

use thiserror::Error;

use super::document::DocumentId;

/// Result type for document registry operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Document resolution errors
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    #[error("Document not found: {0}")]
    NotFound(DocumentId),

    #[error("Invalid document id: {0}")]
    InvalidId(String),

    #[error("Failed to read document {0}: {1}")]
    Io(DocumentId, String),

    #[error("Malformed document {0}: {1}")]
    Malformed(DocumentId, String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DocumentError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            DocumentError::NotFound(_) => 404,
            DocumentError::InvalidId(_) => 400,
            DocumentError::Io(_, _) => 500,
            DocumentError::Malformed(_, _) => 500,
            DocumentError::Internal(_) => 500,
        }
    }
}
