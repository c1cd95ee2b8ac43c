//! # Endpoint Request
//!
//! Named request parameters gathered from the query string and the matched
//! route. Route parameters take precedence over query parameters with the
//! same name.

use std::collections::HashMap;

use crate::documents::DocumentId;

/// Name of the parameter carrying the parent document id
pub const DOCUMENT_ID_PARAM: &str = "document_id";

/// Parameters of a single endpoint request
#[derive(Debug, Clone, Default)]
pub struct EndpointRequest {
    params: HashMap<String, String>,
}

impl EndpointRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from query parameters, then overlay route parameters
    pub fn from_parts(query: HashMap<String, String>, path: HashMap<String, String>) -> Self {
        let mut params = query;
        params.extend(path);
        Self { params }
    }

    /// Set a parameter
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Get a parameter by name
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// The parent document id, if one was supplied and is non-empty
    pub fn document_id(&self) -> Option<DocumentId> {
        self.get_param(DOCUMENT_ID_PARAM)
            .filter(|id| !id.is_empty())
            .map(DocumentId::from)
    }
}
