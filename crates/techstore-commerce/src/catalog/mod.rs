//! Product catalog module.
//!
//! Contains the product record, the read-only catalog store and the grid
//! listing modes.

mod listing;
pub(crate) mod product;
mod store;

pub use listing::Listing;
pub use product::{Badge, Product};
pub use store::{Catalog, BUNDLED_CATALOG};
