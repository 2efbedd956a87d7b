//! Product records as they appear in the bundled catalog.

use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// Promotional badge shown on product cards and the hero banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    /// Product cannot be purchased.
    OutOfStock,
    /// Recently added product.
    New,
    /// Product is discounted.
    OnSale,
    /// Shown on the hero banner for regular available products.
    FreeShipping,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::OutOfStock => "out_of_stock",
            Badge::New => "new",
            Badge::OnSale => "on_sale",
            Badge::FreeShipping => "free_shipping",
        }
    }

    /// Storefront label.
    pub fn label(&self) -> &'static str {
        match self {
            Badge::OutOfStock => "Sin Stock",
            Badge::New => "Nuevo",
            Badge::OnSale => "Oferta",
            Badge::FreeShipping => "Envío Gratis",
        }
    }
}

/// A product in the catalog.
///
/// Immutable at runtime; every field comes from the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category label.
    pub category: String,
    /// Selling price.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Price before the sale, when the product is discounted.
    #[serde(default, with = "money::decimal::option", skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Primary image reference (URL or glyph).
    pub image: String,
    /// Additional images for the detail carousel.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Feature bullet points, in display order.
    #[serde(default)]
    pub features: Vec<String>,
    /// Whether the product can be purchased.
    pub available: bool,
    /// Shown in the featured grid.
    #[serde(default)]
    pub featured: bool,
    /// Flagged as new.
    #[serde(default)]
    pub is_new: bool,
    /// Flagged as on sale.
    #[serde(default)]
    pub is_on_sale: bool,
}

impl Product {
    /// Images for the detail carousel, falling back to the primary image.
    pub fn gallery(&self) -> Vec<String> {
        if self.images.is_empty() {
            vec![self.image.clone()]
        } else {
            self.images.clone()
        }
    }

    /// Savings against the original price as a rounded percentage.
    pub fn savings_percent(&self) -> Option<u32> {
        self.original_price.and_then(|original| {
            if original.amount_cents > 0 && original.amount_cents >= self.price.amount_cents {
                let savings = (original.amount_cents - self.price.amount_cents) as f64;
                Some((savings / original.amount_cents as f64 * 100.0).round() as u32)
            } else {
                None
            }
        })
    }

    /// Badges for product cards and the detail view.
    pub fn badges(&self) -> Vec<Badge> {
        if !self.available {
            return vec![Badge::OutOfStock];
        }

        let mut badges = Vec::new();
        if self.is_new {
            badges.push(Badge::New);
        }
        if self.is_on_sale {
            badges.push(Badge::OnSale);
        }
        badges
    }

    /// Badges for the hero banner, which advertises free shipping on
    /// regular available products.
    pub fn hero_badges(&self) -> Vec<Badge> {
        let mut badges = self.badges();
        if self.available && !self.is_new && !self.is_on_sale {
            badges.push(Badge::FreeShipping);
        }
        badges
    }

    /// Check the record invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("product {} has an empty name", self.id));
        }
        if !self.price.is_positive() {
            return Err(format!("product {} has a non-positive price", self.id));
        }
        if let Some(original) = self.original_price {
            if original < self.price {
                return Err(format!(
                    "product {} has an original price below its price",
                    self.id
                ));
            }
        }
        if self.image.trim().is_empty() {
            return Err(format!("product {} has no image", self.id));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample(id: u32, price_cents: i64, available: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Producto {}", id),
            category: "Audio".to_string(),
            price: Money::new(price_cents),
            original_price: None,
            image: "🎧".to_string(),
            images: Vec::new(),
            features: vec!["Bluetooth 5.3".to_string()],
            available,
            featured: false,
            is_new: false,
            is_on_sale: false,
        }
    }

    #[test]
    fn test_product_from_json() {
        let json = r#"{
            "id": 4,
            "name": "Cargador 65W",
            "category": "Cargadores",
            "price": 29.99,
            "originalPrice": 39.99,
            "image": "🔌",
            "features": ["GaN", "USB-C"],
            "available": true,
            "isOnSale": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(4));
        assert_eq!(product.price.amount_cents, 2999);
        assert_eq!(product.original_price, Some(Money::new(3999)));
        assert!(product.is_on_sale);
        assert!(!product.featured);
        assert_eq!(product.features.len(), 2);
    }

    #[test]
    fn test_gallery_falls_back_to_image() {
        let mut product = sample(1, 1000, true);
        assert_eq!(product.gallery(), vec!["🎧".to_string()]);

        product.images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        assert_eq!(product.gallery().len(), 2);
    }

    #[test]
    fn test_savings_percent() {
        let mut product = sample(1, 7500, true);
        assert_eq!(product.savings_percent(), None);

        product.original_price = Some(Money::new(10000));
        assert_eq!(product.savings_percent(), Some(25));

        product.original_price = Some(Money::new(8999));
        assert_eq!(product.savings_percent(), Some(17));
    }

    #[test]
    fn test_badges() {
        let mut product = sample(1, 1000, false);
        product.is_new = true;
        assert_eq!(product.badges(), vec![Badge::OutOfStock]);

        product.available = true;
        product.is_on_sale = true;
        assert_eq!(product.badges(), vec![Badge::New, Badge::OnSale]);

        let regular = sample(2, 1000, true);
        assert!(regular.badges().is_empty());
        assert_eq!(regular.hero_badges(), vec![Badge::FreeShipping]);
    }

    #[test]
    fn test_validate() {
        assert!(sample(1, 1000, true).validate().is_ok());
        assert!(sample(1, 0, true).validate().is_err());

        let mut product = sample(1, 1000, true);
        product.original_price = Some(Money::new(900));
        assert!(product.validate().is_err());

        let mut product = sample(1, 1000, true);
        product.image = String::new();
        assert!(product.validate().is_err());
    }
}
