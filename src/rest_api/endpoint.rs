//! # Sub-Endpoint
//!
//! A sub-endpoint serves one child concept of a parent resource (here, the
//! elements of a document). It answers a collection request and an item
//! request; the item route is declared by `format()`, e.g. `{element_id}`.

use serde::Serialize;

use super::errors::RestResult;
use super::request::EndpointRequest;

/// Collection and single-item handlers for a child resource
pub trait SubEndpoint: Send + Sync {
    /// Body of a single-item response
    type Item: Serialize + Send + 'static;

    /// Body of a collection response
    type Items: Serialize + Send + 'static;

    /// Route segment of the sub-endpoint under its parent
    fn name(&self) -> &'static str;

    /// Item route format, a single `{param}` segment
    fn format(&self) -> &'static str;

    /// Collection request
    fn get_items(&self, request: &EndpointRequest) -> RestResult<Self::Items>;

    /// Item request; `Ok(None)` is a miss, not an error
    fn get_item(&self, id: &str, request: &EndpointRequest) -> RestResult<Option<Self::Item>>;
}

/// Route parameter name declared by an item format
///
/// `{element_id}` yields `element_id`. A format without braces is used as
/// the parameter name verbatim.
pub fn item_param(format: &str) -> &str {
    format
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_param() {
        assert_eq!(item_param("{element_id}"), "element_id");
        assert_eq!(item_param("id"), "id");
        assert_eq!(item_param("{unterminated"), "{unterminated");
    }
}
