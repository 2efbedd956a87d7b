//! Cart state machine and line item types.
//!
//! The cart is a reducer: every mutation goes through [`CartAction`], and the
//! derived `total` and `item_count` are recomputed from the line items after
//! each transition instead of being patched incrementally.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Largest quantity a single line item can hold. Adds stop and quantity
/// updates clamp here, which keeps `total` and `item_count` exact.
pub const MAX_QUANTITY: i64 = 999;

/// A product entry in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineItem {
    /// Product being purchased. Unique within a cart.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Category label (denormalized for display).
    pub category: String,
    /// Primary image (denormalized for display).
    pub image: String,
    /// Quantity, between 1 and [`MAX_QUANTITY`].
    pub quantity: i64,
}

impl CartLineItem {
    /// Create a line item with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul(self.quantity)
    }
}

/// Mutation intents accepted by the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartAction {
    /// Add one unit of a product. Ignored when the product is unavailable.
    AddItem(Product),
    /// Delete the line item for a product.
    RemoveItem(ProductId),
    /// Set an absolute quantity, clamped to [`MAX_QUANTITY`]; zero or less
    /// removes the line item.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Remove every line item.
    ClearCart,
}

/// Items in the cart plus their derived totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "CartItems")]
pub struct CartState {
    items: Vec<CartLineItem>,
    total: Money,
    item_count: i64,
}

/// Serialized form read back into a cart; totals are always recomputed.
#[derive(Deserialize)]
struct CartItems {
    #[serde(default)]
    items: Vec<CartLineItem>,
}

impl From<CartItems> for CartState {
    fn from(snapshot: CartItems) -> Self {
        let mut cart = Self::new();
        for mut item in snapshot.items.into_iter().filter(|i| i.quantity > 0) {
            if !cart.contains(item.product_id) {
                item.quantity = item.quantity.min(MAX_QUANTITY);
                cart.items.push(item);
            }
        }
        cart.recompute();
        cart
    }
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action in place. Returns whether the cart changed.
    pub fn dispatch(&mut self, action: CartAction) -> bool {
        let changed = match action {
            CartAction::AddItem(product) => self.add_item(&product),
            CartAction::RemoveItem(product_id) => self.remove_item(product_id),
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => self.update_quantity(product_id, quantity),
            CartAction::ClearCart => self.clear(),
        };

        if changed {
            self.recompute();
        }
        changed
    }

    /// Pure transition: consume the cart and return the next state.
    pub fn reduce(mut self, action: CartAction) -> Self {
        self.dispatch(action);
        self
    }

    fn add_item(&mut self, product: &Product) -> bool {
        if !product.available {
            tracing::warn!(product_id = %product.id, "ignoring add of unavailable product");
            return false;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            if existing.quantity >= MAX_QUANTITY {
                tracing::warn!(product_id = %product.id, "quantity already at maximum");
                return false;
            }
            existing.quantity += 1;
            tracing::debug!(product_id = %product.id, quantity = existing.quantity, "cart quantity incremented");
        } else {
            self.items.push(CartLineItem::from_product(product));
            tracing::debug!(product_id = %product.id, "cart line item added");
        }
        true
    }

    fn remove_item(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(%product_id, "cart line item removed");
        }
        removed
    }

    fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        let quantity = quantity.min(MAX_QUANTITY);

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                tracing::debug!(%product_id, quantity, "cart quantity set");
                true
            }
            _ => false,
        }
    }

    fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        tracing::debug!("cart cleared");
        true
    }

    fn recompute(&mut self) {
        self.total = self
            .items
            .iter()
            .fold(Money::zero(), |acc, i| acc.saturating_add(i.line_total()));
        self.item_count = self.items.iter().map(|i| i.quantity).sum();
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of price times quantity over all line items.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether a product has a line item.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|i| i.product_id == product_id)
    }

    /// Get the line item for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }
}
