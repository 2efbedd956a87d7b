//! TechStore storefront
//!
//! Client-side rendered Leptos app over `techstore-commerce`:
//! - Rotating hero banner driven by browser timers
//! - Featured / full product grid
//! - Product detail with image carousel and shareable QR code
//! - Cart drawer with discount codes and the WhatsApp order link

mod app;
mod cart;
mod hero;
mod product;
mod state;

pub use app::App;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
