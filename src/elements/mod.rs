//! # Elements
//!
//! Element lookup over documents resolved through a `DocumentRegistry`.

mod lookup;
mod search;

pub use lookup::{key_by_id, ElementCollection, ElementLookup};
pub use search::{find_element_recursive, PreOrder};
