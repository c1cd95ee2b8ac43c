//! # REST API Module
//!
//! Sub-endpoints of the `editor/documents` resource. The only sub-endpoint
//! is `elements`.

pub mod elements;
pub mod endpoint;
pub mod errors;
pub mod request;
pub mod server;

pub use elements::ElementsEndpoint;
pub use endpoint::{item_param, SubEndpoint};
pub use errors::{ErrorResponse, RestError, RestResult};
pub use request::{EndpointRequest, DOCUMENT_ID_PARAM};
pub use server::RestServer;
