//! # Element
//!
//! A node of a document's layout tree (section, column, widget, ...).
//!
//! Only `id`, `elType` and the child list are interpreted here. Every other
//! key (`settings`, `widgetType`, `isInner`, ...) is kept as an opaque JSON
//! value and written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single element with its ordered children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Element id, unique within its document (assumed, not enforced)
    pub id: String,

    /// Element type, e.g. "section" or "widget"
    #[serde(rename = "elType", default, skip_serializing_if = "Option::is_none")]
    pub el_type: Option<String>,

    /// Node-local attributes, opaque to this crate
    #[serde(flatten)]
    pub attributes: Map<String, Value>,

    /// Child elements in stored order
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Element {
    /// Create a leaf element with no type and no attributes
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            el_type: None,
            attributes: Map::new(),
            elements: Vec::new(),
        }
    }

    /// Set the element type
    pub fn with_type(mut self, el_type: impl Into<String>) -> Self {
        self.el_type = Some(el_type.into());
        self
    }

    /// Set a node-local attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Replace the children
    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.elements = children;
        self
    }

    /// Child elements
    pub fn children(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_leaf(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_opaque_attributes() {
        let raw = json!({
            "id": "b",
            "elType": "widget",
            "widgetType": "heading",
            "settings": {"title": "Hello"},
            "elements": []
        });

        let element: Element = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(element.id, "b");
        assert_eq!(element.el_type.as_deref(), Some("widget"));
        assert_eq!(element.attributes["widgetType"], "heading");
        assert!(element.is_leaf());

        assert_eq!(serde_json::to_value(&element).unwrap(), raw);
    }

    #[test]
    fn test_missing_children_read_as_leaf() {
        let element: Element = serde_json::from_value(json!({"id": "x"})).unwrap();
        assert!(element.is_leaf());
        assert!(element.el_type.is_none());

        let out = serde_json::to_value(&element).unwrap();
        assert_eq!(out, json!({"id": "x", "elements": []}));
    }

    #[test]
    fn test_nested_children_keep_order() {
        let element: Element = serde_json::from_value(json!({
            "id": "s",
            "elType": "section",
            "elements": [
                {"id": "c1", "elType": "column", "elements": []},
                {"id": "c2", "elType": "column", "elements": []}
            ]
        }))
        .unwrap();

        let ids: Vec<&str> = element.children().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2"]);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result: Result<Element, _> = serde_json::from_value(json!({"elType": "section"}));
        assert!(result.is_err());
    }
}
