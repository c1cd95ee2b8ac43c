//! # Document
//!
//! A page owned by the host, identified by a `DocumentId` and holding a tree
//! of elements. This crate only ever reads documents.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::element::Element;

/// Host-defined document identifier
///
/// Hosts address documents by numeric post id or by string key, so both JSON
/// integers and JSON strings are accepted. The empty id means "no document".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for DocumentId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => DocumentId(s),
            Raw::Unsigned(n) => DocumentId(n.to_string()),
            Raw::Signed(n) => DocumentId(n.to_string()),
        })
    }
}

/// A stored document and its element tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document id; may be omitted in stored files
    #[serde(default)]
    pub id: DocumentId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Top-level elements, each owning its subtree
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new(id: impl Into<DocumentId>, elements: Vec<Element>) -> Self {
        Self {
            id: id.into(),
            title: None,
            elements,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The nested element tree in stored order
    pub fn elements_data(&self) -> &[Element] {
        &self.elements
    }

    /// Take ownership of the element tree
    pub fn into_elements_data(self) -> Vec<Element> {
        self.elements
    }
}
