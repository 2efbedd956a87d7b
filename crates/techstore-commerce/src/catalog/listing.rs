//! Product grid listing: featured selection or the full catalog.

use crate::catalog::{Catalog, Product};
use serde::{Deserialize, Serialize};

/// Which products the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Listing {
    /// Only products flagged as featured.
    #[default]
    Featured,
    /// Every product in the catalog.
    All,
}

impl Listing {
    /// Switch between featured and all.
    pub fn toggle(self) -> Self {
        match self {
            Listing::Featured => Listing::All,
            Listing::All => Listing::Featured,
        }
    }

    /// Products to display, in catalog order.
    pub fn products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        match self {
            Listing::Featured => catalog.featured().collect(),
            Listing::All => catalog.all().iter().collect(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Listing::Featured => "Productos Destacados",
            Listing::All => "Todos los Productos",
        }
    }

    /// Label of the button that switches listings.
    pub fn toggle_label(&self, catalog: &Catalog) -> String {
        match self {
            Listing::Featured => format!(
                "Ver Todos los Productos ({} más)",
                Self::hidden_count(catalog)
            ),
            Listing::All => "Ver Solo Destacados".to_string(),
        }
    }

    /// "Showing N of M" footer.
    pub fn summary(&self, catalog: &Catalog) -> String {
        format!(
            "Mostrando {} de {} productos",
            self.products(catalog).len(),
            catalog.len()
        )
    }

    /// Products only visible in the full listing.
    pub fn hidden_count(catalog: &Catalog) -> usize {
        catalog.len() - catalog.featured().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::tests::sample;

    fn catalog() -> Catalog {
        let mut a = sample(1, 1000, true);
        a.featured = true;
        let b = sample(2, 2000, true);
        let mut c = sample(3, 3000, false);
        c.featured = true;
        Catalog::new(vec![a, b, c]).unwrap()
    }

    #[test]
    fn test_featured_listing() {
        let catalog = catalog();
        let shown: Vec<u32> = Listing::Featured
            .products(&catalog)
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(shown, vec![1, 3]);
        assert_eq!(Listing::Featured.summary(&catalog), "Mostrando 2 de 3 productos");
        assert_eq!(
            Listing::Featured.toggle_label(&catalog),
            "Ver Todos los Productos (1 más)"
        );
    }

    #[test]
    fn test_all_listing() {
        let catalog = catalog();
        let listing = Listing::Featured.toggle();
        assert_eq!(listing, Listing::All);
        assert_eq!(listing.products(&catalog).len(), 3);
        assert_eq!(listing.title(), "Todos los Productos");
        assert_eq!(listing.toggle(), Listing::Featured);
    }
}
