//! # Elements Sub-Endpoint
//!
//! `elements` under `editor/documents`:
//!
//! - collection: the document's top-level elements keyed by id
//! - item (`{element_id}`): one element from anywhere in the tree, or `null`

use std::sync::Arc;

use uuid::Uuid;

use crate::documents::{DocumentError, DocumentId, DocumentRegistry, Element};
use crate::elements::{ElementCollection, ElementLookup};
use crate::observability::{Logger, MetricsRegistry};

use super::endpoint::SubEndpoint;
use super::errors::RestResult;
use super::request::EndpointRequest;

/// The elements sub-endpoint
pub struct ElementsEndpoint {
    lookup: ElementLookup,
    metrics: Arc<MetricsRegistry>,
}

impl ElementsEndpoint {
    pub fn new(registry: Arc<dyn DocumentRegistry>, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            lookup: ElementLookup::new(registry),
            metrics,
        }
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    fn resolution_failed(&self, request_id: &str, document_id: &str, err: &DocumentError) {
        self.metrics.increment_resolution_failures();
        Logger::error(
            "DOCUMENT_RESOLUTION_FAILED",
            &[
                ("request_id", request_id),
                ("document_id", document_id),
                ("error", err.to_string().as_str()),
            ],
        );
    }
}

fn id_for_log(document_id: &Option<DocumentId>) -> &str {
    document_id.as_ref().map(DocumentId::as_str).unwrap_or("")
}

impl SubEndpoint for ElementsEndpoint {
    type Item = Element;
    type Items = ElementCollection;

    fn name(&self) -> &'static str {
        "elements"
    }

    fn format(&self) -> &'static str {
        "{element_id}"
    }

    fn get_items(&self, request: &EndpointRequest) -> RestResult<ElementCollection> {
        self.metrics.increment_list_requests();
        let request_id = Uuid::new_v4().to_string();
        let document_id = request.document_id();

        match self.lookup.list_elements(document_id.as_ref()) {
            Ok(elements) => {
                Logger::info(
                    "ELEMENTS_LISTED",
                    &[
                        ("request_id", request_id.as_str()),
                        ("document_id", id_for_log(&document_id)),
                        ("count", elements.len().to_string().as_str()),
                    ],
                );
                Ok(elements)
            }
            Err(err) => {
                self.resolution_failed(&request_id, id_for_log(&document_id), &err);
                Err(err.into())
            }
        }
    }

    fn get_item(&self, element_id: &str, request: &EndpointRequest) -> RestResult<Option<Element>> {
        self.metrics.increment_item_requests();
        let request_id = Uuid::new_v4().to_string();
        let document_id = request.document_id();

        match self.lookup.get_element(element_id, document_id.as_ref()) {
            Ok(Some(element)) => {
                self.metrics.increment_element_hits();
                Logger::info(
                    "ELEMENT_FOUND",
                    &[
                        ("request_id", request_id.as_str()),
                        ("document_id", id_for_log(&document_id)),
                        ("element_id", element_id),
                    ],
                );
                Ok(Some(element))
            }
            Ok(None) => {
                self.metrics.increment_element_misses();
                Logger::info(
                    "ELEMENT_MISSED",
                    &[
                        ("request_id", request_id.as_str()),
                        ("document_id", id_for_log(&document_id)),
                        ("element_id", element_id),
                    ],
                );
                Ok(None)
            }
            Err(err) => {
                self.resolution_failed(&request_id, id_for_log(&document_id), &err);
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::{Document, InMemoryDocumentRegistry};
    use crate::rest_api::request::DOCUMENT_ID_PARAM;
    use crate::rest_api::RestError;

    fn endpoint() -> ElementsEndpoint {
        let registry = InMemoryDocumentRegistry::with_documents(vec![Document::new(
            "doc1",
            vec![Element::new("a")
                .with_type("section")
                .with_children(vec![Element::new("b").with_type("widget")])],
        )]);
        ElementsEndpoint::new(Arc::new(registry), Arc::new(MetricsRegistry::new()))
    }

    #[test]
    fn test_name_and_format() {
        let endpoint = endpoint();
        assert_eq!(endpoint.name(), "elements");
        assert_eq!(endpoint.format(), "{element_id}");
    }

    #[test]
    fn test_get_items_counts_requests() {
        let endpoint = endpoint();
        let request = EndpointRequest::new().with_param(DOCUMENT_ID_PARAM, "doc1");

        let items = endpoint.get_items(&request).unwrap();
        assert!(items.contains_key("a"));
        assert_eq!(endpoint.metrics().snapshot().list_requests, 1);
    }

    #[test]
    fn test_get_item_hit_and_miss() {
        let endpoint = endpoint();
        let request = EndpointRequest::new().with_param(DOCUMENT_ID_PARAM, "doc1");

        assert_eq!(endpoint.get_item("b", &request).unwrap().unwrap().id, "b");
        assert!(endpoint.get_item("z", &request).unwrap().is_none());

        let snap = endpoint.metrics().snapshot();
        assert_eq!(snap.item_requests, 2);
        assert_eq!(snap.element_hits, 1);
        assert_eq!(snap.element_misses, 1);
    }

    #[test]
    fn test_unknown_document_counts_failure() {
        let endpoint = endpoint();
        let request = EndpointRequest::new().with_param(DOCUMENT_ID_PARAM, "ghost");

        let err = endpoint.get_item("a", &request).unwrap_err();
        assert!(matches!(err, RestError::Document(DocumentError::NotFound(_))));
        assert_eq!(endpoint.metrics().snapshot().resolution_failures, 1);
    }
}
