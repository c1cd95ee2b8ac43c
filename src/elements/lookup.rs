//! # Element Lookup
//!
//! The two read operations behind the `elements` sub-endpoint:
//!
//! - `list_elements`: top-level elements of a document keyed by id. Only one
//!   level is flattened; nested children stay inside their parents.
//! - `get_element`: a single element found anywhere in the nested tree.
//!
//! Both treat a missing document id as "nothing requested" and return an
//! empty result without touching the registry. Registry failures are
//! returned as-is.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::documents::{DocumentId, DocumentRegistry, DocumentResult, Element};

use super::search::find_element_recursive;

/// Top-level elements keyed by their own id
pub type ElementCollection = BTreeMap<String, Element>;

/// Key a sequence of elements by id
///
/// When ids repeat, the later element replaces the earlier one.
pub fn key_by_id(elements: Vec<Element>) -> ElementCollection {
    elements
        .into_iter()
        .map(|element| (element.id.clone(), element))
        .collect()
}

/// Stateless element lookup over an injected registry
#[derive(Clone)]
pub struct ElementLookup {
    registry: Arc<dyn DocumentRegistry>,
}

impl ElementLookup {
    pub fn new(registry: Arc<dyn DocumentRegistry>) -> Self {
        Self { registry }
    }

    /// List a document's top-level elements keyed by id
    pub fn list_elements(&self, document_id: Option<&DocumentId>) -> DocumentResult<ElementCollection> {
        let Some(document_id) = requested(document_id) else {
            return Ok(ElementCollection::new());
        };

        let document = self.registry.get(document_id)?;
        Ok(key_by_id(document.into_elements_data()))
    }

    /// Find an element anywhere in a document's tree
    ///
    /// `Ok(None)` is a soft miss: no document id was given, or no element
    /// carries `element_id`.
    pub fn get_element(
        &self,
        element_id: &str,
        document_id: Option<&DocumentId>,
    ) -> DocumentResult<Option<Element>> {
        let Some(document_id) = requested(document_id) else {
            return Ok(None);
        };

        let document = self.registry.get(document_id)?;
        Ok(find_element_recursive(document.elements_data(), element_id).cloned())
    }
}

fn requested(document_id: Option<&DocumentId>) -> Option<&DocumentId> {
    document_id.filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use crate::documents::{Document, DocumentError, InMemoryDocumentRegistry};

    /// Registry wrapper that counts resolutions
    struct CountingRegistry {
        inner: InMemoryDocumentRegistry,
        calls: AtomicUsize,
    }

    impl DocumentRegistry for CountingRegistry {
        fn get(&self, id: &DocumentId) -> DocumentResult<Document> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get(id)
        }
    }

    fn doc1() -> Document {
        serde_json::from_value(json!({
            "id": "doc1",
            "elements": [
                {"id": "a", "elType": "section", "elements": [
                    {"id": "b", "elType": "widget", "elements": []}
                ]}
            ]
        }))
        .unwrap()
    }

    fn setup(documents: Vec<Document>) -> (Arc<CountingRegistry>, ElementLookup) {
        let registry = Arc::new(CountingRegistry {
            inner: InMemoryDocumentRegistry::with_documents(documents),
            calls: AtomicUsize::new(0),
        });
        let lookup = ElementLookup::new(registry.clone());
        (registry, lookup)
    }

    #[test]
    fn test_list_flattens_one_level() {
        let (_, lookup) = setup(vec![doc1()]);

        let listed = lookup.list_elements(Some(&"doc1".into())).unwrap();

        assert_eq!(listed.keys().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(listed["a"].children()[0].id, "b");
        assert!(!listed.contains_key("b"));
    }

    #[test]
    fn test_list_keys_match_element_ids() {
        let elements = vec![
            Element::new("x").with_type("section"),
            Element::new("y").with_type("section"),
            Element::new("z").with_type("section"),
        ];
        let (_, lookup) = setup(vec![Document::new("d", elements)]);

        let listed = lookup.list_elements(Some(&"d".into())).unwrap();
        assert_eq!(listed.len(), 3);
        for (key, element) in &listed {
            assert_eq!(key, &element.id);
        }
    }

    #[test]
    fn test_list_duplicate_ids_last_write_wins() {
        let elements = vec![
            Element::new("dup").with_type("first"),
            Element::new("other"),
            Element::new("dup").with_type("last"),
        ];
        let (_, lookup) = setup(vec![Document::new("d", elements)]);

        let listed = lookup.list_elements(Some(&"d".into())).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed["dup"].el_type.as_deref(), Some("last"));
    }

    #[test]
    fn test_list_without_document_skips_registry() {
        let (registry, lookup) = setup(vec![doc1()]);

        assert!(lookup.list_elements(None).unwrap().is_empty());
        assert!(lookup.list_elements(Some(&DocumentId::default())).unwrap().is_empty());
        assert_eq!(registry.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_get_nested_element() {
        let (_, lookup) = setup(vec![doc1()]);

        let found = lookup.get_element("b", Some(&"doc1".into())).unwrap().unwrap();
        assert_eq!(
            serde_json::to_value(&found).unwrap(),
            json!({"id": "b", "elType": "widget", "elements": []})
        );
    }

    #[test]
    fn test_get_returns_subtree() {
        let document = doc1();
        let expected = document.elements_data()[0].clone();
        let (_, lookup) = setup(vec![document]);

        let found = lookup.get_element("a", Some(&"doc1".into())).unwrap();
        assert_eq!(found, Some(expected));
    }

    #[test]
    fn test_get_miss_is_not_an_error() {
        let (_, lookup) = setup(vec![doc1()]);

        let found = lookup.get_element("z", Some(&"doc1".into())).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_get_without_document_skips_registry() {
        let (registry, lookup) = setup(vec![doc1()]);

        assert!(lookup.get_element("a", None).unwrap().is_none());
        assert_eq!(registry.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_registry_error_propagates_unchanged() {
        let (registry, lookup) = setup(vec![]);

        let list_err = lookup.list_elements(Some(&"ghost".into())).unwrap_err();
        let get_err = lookup.get_element("a", Some(&"ghost".into())).unwrap_err();

        assert!(matches!(list_err, DocumentError::NotFound(ref id) if id.as_str() == "ghost"));
        assert!(matches!(get_err, DocumentError::NotFound(_)));
        assert_eq!(registry.calls.load(Ordering::SeqCst), 2);
    }
}
