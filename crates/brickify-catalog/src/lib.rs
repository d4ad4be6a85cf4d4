//! Backend client for brickify.
//!
//! - [`ApiClient`] issues blocking JSON requests against the backend
//! - [`PartCatalog`] is the catalog boundary, [`HttpCatalog`] its REST implementation
//! - [`PartService`] wraps any catalog and turns failures into empty results

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod api;
pub mod catalog;
pub mod error;

#[cfg(test)]
mod test_server;

pub use api::ApiClient;
pub use catalog::{HttpCatalog, PartCatalog, PartService};
pub use error::{CatalogError, CatalogResult};
