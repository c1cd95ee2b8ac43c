//! # REST API HTTP Server
//!
//! Axum routes for a sub-endpoint mounted under its parent resource.
//!
//! For a sub-endpoint named `elements` with format `{element_id}`:
//!
//! - `GET /elements?document_id=..`
//! - `GET /elements/:element_id?document_id=..`
//! - `GET /:document_id/elements`
//! - `GET /:document_id/elements/:element_id`

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::endpoint::{item_param, SubEndpoint};
use super::errors::{RestError, RestResult};
use super::request::{EndpointRequest, DOCUMENT_ID_PARAM};

/// REST server for one sub-endpoint
pub struct RestServer<E: SubEndpoint> {
    endpoint: Arc<E>,
}

impl<E: SubEndpoint + 'static> RestServer<E> {
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint: Arc::new(endpoint),
        }
    }

    pub fn from_shared(endpoint: Arc<E>) -> Self {
        Self { endpoint }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let name = self.endpoint.name();
        let param = item_param(self.endpoint.format());

        Router::new()
            .route(&format!("/{}", name), get(items_handler::<E>))
            .route(&format!("/{}/:{}", name, param), get(item_handler::<E>))
            .route(
                &format!("/:{}/{}", DOCUMENT_ID_PARAM, name),
                get(items_handler::<E>),
            )
            .route(
                &format!("/:{}/{}/:{}", DOCUMENT_ID_PARAM, name, param),
                get(item_handler::<E>),
            )
            .with_state(self.endpoint)
    }
}

/// Run a lookup on the blocking pool; registries may read from disk
async fn run_blocking<T, F>(lookup: F) -> RestResult<T>
where
    F: FnOnce() -> RestResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(lookup)
        .await
        .map_err(|e| RestError::Internal(format!("Lookup task failed: {}", e)))?
}

/// Collection handler
async fn items_handler<E: SubEndpoint + 'static>(
    State(endpoint): State<Arc<E>>,
    path: Option<Path<HashMap<String, String>>>,
    Query(query): Query<HashMap<String, String>>,
) -> RestResult<Json<E::Items>> {
    let path = path.map(|Path(params)| params).unwrap_or_default();
    let request = EndpointRequest::from_parts(query, path);

    let items = run_blocking(move || endpoint.get_items(&request)).await?;
    Ok(Json(items))
}

/// Single-item handler; a miss is `200 null`
async fn item_handler<E: SubEndpoint + 'static>(
    State(endpoint): State<Arc<E>>,
    Path(path): Path<HashMap<String, String>>,
    Query(query): Query<HashMap<String, String>>,
) -> RestResult<Json<Option<E::Item>>> {
    let param = item_param(endpoint.format());
    let id = path
        .get(param)
        .cloned()
        .ok_or_else(|| RestError::InvalidParam(format!("missing {}", param)))?;
    let request = EndpointRequest::from_parts(query, path);

    let item = run_blocking(move || endpoint.get_item(&id, &request)).await?;
    Ok(Json(item))
}
