//! Cart pricing calculations.

use crate::cart::{compute_discount, CartState, DiscountCode};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Amount taken off by the applied code.
    pub discount: Money,
    /// Amount payable (subtotal - discount).
    pub total: Money,
    /// Applied code, if any.
    pub applied_code: Option<DiscountCode>,
}

impl CartPricing {
    /// Price a cart with an optional applied code.
    pub fn compute(cart: &CartState, applied: Option<&DiscountCode>) -> Self {
        let subtotal = cart.total();
        let discount = compute_discount(subtotal, applied);
        Self {
            subtotal,
            discount,
            total: subtotal.saturating_sub(discount),
            applied_code: applied.cloned(),
        }
    }

    /// Check if a discount is applied.
    pub fn has_discount(&self) -> bool {
        self.applied_code.is_some()
    }

    /// Percentage of the applied code, zero when none.
    pub fn discount_percent(&self) -> u32 {
        self.applied_code.as_ref().map_or(0, |c| c.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartAction, DiscountPolicy, DiscountState};
    use crate::catalog::product::tests::sample;
    use crate::ids::ProductId;

    fn cart() -> CartState {
        let mut cart = CartState::new();
        cart.dispatch(CartAction::AddItem(sample(1, 1000, true)));
        cart.dispatch(CartAction::UpdateQuantity {
            product_id: ProductId::new(1),
            quantity: 2,
        });
        cart.dispatch(CartAction::AddItem(sample(2, 500, true)));
        cart
    }

    #[test]
    fn test_pricing_without_code() {
        let pricing = CartPricing::compute(&cart(), None);
        assert_eq!(pricing.subtotal.amount_cents, 2500);
        assert_eq!(pricing.discount, Money::zero());
        assert_eq!(pricing.total.amount_cents, 2500);
        assert!(!pricing.has_discount());
        assert_eq!(pricing.discount_percent(), 0);
    }

    #[test]
    fn test_pricing_with_code() {
        let mut discounts = DiscountState::new();
        discounts.apply(&DiscountPolicy::default(), "delfi").unwrap();

        let pricing = CartPricing::compute(&cart(), discounts.applied());
        assert_eq!(pricing.discount.amount_cents, 125);
        assert_eq!(pricing.total.amount_cents, 2375);
        assert_eq!(pricing.total.display(), "$23.75");
        assert_eq!(pricing.discount_percent(), 5);
    }

    #[test]
    fn test_removing_code_restores_total() {
        let cart = cart();
        let mut discounts = DiscountState::new();
        let before = CartPricing::compute(&cart, discounts.applied());

        discounts.apply(&DiscountPolicy::default(), "DELFI").unwrap();
        discounts.remove();

        assert_eq!(CartPricing::compute(&cart, discounts.applied()), before);
    }

    #[test]
    fn test_empty_cart_pricing() {
        let mut discounts = DiscountState::new();
        discounts.apply(&DiscountPolicy::default(), "delfi").unwrap();
        let pricing = CartPricing::compute(&CartState::new(), discounts.applied());
        assert_eq!(pricing.total, Money::zero());
        assert_eq!(pricing.discount, Money::zero());
    }
}
