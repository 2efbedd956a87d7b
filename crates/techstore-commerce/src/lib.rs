//! Storefront domain logic for TechStore.
//!
//! This crate provides everything the storefront needs besides rendering:
//!
//! - **Catalog**: static product records loaded from the bundled catalog file
//! - **Cart**: the cart state machine, discount codes, pricing
//! - **Showcase**: the detail-view image carousel and the rotating hero banner
//! - **Share**: the pre-filled order message link and product QR codes
//!
//! # Example
//!
//! ```rust
//! use techstore_commerce::prelude::*;
//!
//! let catalog = Catalog::bundled().unwrap();
//! let config = StoreConfig::default();
//!
//! let mut cart = CartState::new();
//! for product in catalog.available().take(2) {
//!     cart.dispatch(CartAction::AddItem(product.clone()));
//! }
//!
//! let mut discounts = DiscountState::new();
//! discounts.apply(&config.discount_policy(), "delfi").unwrap();
//!
//! let pricing = CartPricing::compute(&cart, discounts.applied());
//! assert_eq!(pricing.total, pricing.subtotal - pricing.discount);
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod share;
pub mod showcase;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::{ProductId, SessionId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, SessionId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Badge, Catalog, Listing, Product};

    // Cart
    pub use crate::cart::{
        compute_discount, CartAction, CartLineItem, CartPricing, CartState, DiscountCode,
        DiscountPolicy, DiscountState,
    };

    // Showcase
    pub use crate::showcase::{Carousel, HeroEvent, HeroPhase, HeroRotator, HeroTiming};

    // Share
    pub use crate::share::{product_url, qr_svg, MessageComposer};
}
