//! Shopping cart module.
//!
//! Contains the cart state machine, discount codes, and pricing.

mod cart;
mod discount;
mod pricing;

pub use cart::{CartAction, CartLineItem, CartState, MAX_QUANTITY};
pub use discount::{
    compute_discount, DiscountCode, DiscountPolicy, DiscountState, DEFAULT_DISCOUNT_CODE,
    DEFAULT_DISCOUNT_PERCENT,
};
pub use pricing::CartPricing;
