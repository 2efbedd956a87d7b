//! Read-only catalog loaded once at startup.

use std::collections::HashSet;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// The catalog file compiled into the crate.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/products.json");

/// Static list of products, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and invalid records.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            product.validate().map_err(CommerceError::InvalidCatalog)?;
        }

        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The catalog bundled with the storefront.
    pub fn bundled() -> Result<Self, CommerceError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// All products.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products flagged as featured.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    /// Products that can be purchased.
    pub fn available(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.available)
    }

    /// Look up a product.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product, failing with `ProductNotFound`.
    pub fn find(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// Resolve a `/product/:id` route segment.
    pub fn find_by_route(&self, segment: &str) -> Option<&Product> {
        ProductId::from_route(segment).and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::tests::sample;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.featured().count() > 0);
        assert!(catalog.available().count() > 0);
        assert!(catalog.available().count() < catalog.len());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![sample(1, 1000, true), sample(1, 2000, true)]);
        assert!(matches!(result, Err(CommerceError::InvalidCatalog(_))));
    }

    #[test]
    fn test_invalid_product_rejected() {
        let result = Catalog::new(vec![sample(1, 0, true)]);
        assert!(matches!(result, Err(CommerceError::InvalidCatalog(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = Catalog::from_json("{\"not\": \"an array\"}");
        assert!(matches!(result, Err(CommerceError::SerializationError(_))));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(vec![sample(1, 1000, true), sample(2, 500, false)]).unwrap();
        assert_eq!(catalog.get(ProductId::new(2)).map(|p| p.price.amount_cents), Some(500));
        assert!(catalog.get(ProductId::new(9)).is_none());
        assert!(matches!(
            catalog.find(ProductId::new(9)),
            Err(CommerceError::ProductNotFound(id)) if id == ProductId::new(9)
        ));
        assert!(catalog.find_by_route("1").is_some());
        assert!(catalog.find_by_route("uno").is_none());
    }
}
