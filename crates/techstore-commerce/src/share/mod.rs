//! Sharing: the outbound order message and product page QR codes.

mod message;
mod qr;

pub use message::{MessageComposer, DEFAULT_ENDPOINT};
pub use qr::{product_url, qr_svg, QR_SIZE};
