//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Discount code not on the allow-list.
    #[error("Invalid discount code: {0}")]
    InvalidDiscountCode(String),

    /// Catalog data violates a product invariant.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Store configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Share link or QR code could not be produced.
    #[error("Share error: {0}")]
    ShareError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
