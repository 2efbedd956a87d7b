//! Shareable product links and their QR codes.

use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use crate::error::CommerceError;
use crate::ids::ProductId;

/// Minimum rendered size of the QR code, in pixels.
pub const QR_SIZE: u32 = 300;

const QR_DARK: &str = "#1e3a8a";
const QR_LIGHT: &str = "#ffffff";

/// Public URL of a product detail page.
pub fn product_url(base_url: &str, id: ProductId) -> String {
    format!("{}/product/{}", base_url.trim_end_matches('/'), id)
}

/// Render a URL as an SVG QR code with high error correction.
pub fn qr_svg(url: &str) -> Result<String, CommerceError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::H)
        .map_err(|e| CommerceError::ShareError(e.to_string()))?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(QR_SIZE, QR_SIZE)
        .dark_color(svg::Color(QR_DARK))
        .light_color(svg::Color(QR_LIGHT))
        .build())
}
