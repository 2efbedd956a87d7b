//! Catalog browsing commands.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use techstore_commerce::catalog::{Listing, Product};
use techstore_commerce::share::{product_url, qr_svg};

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::output::{badge, badge_cell, price_line};

const WIDTHS: [usize; 5] = [4, 32, 12, 10, 16];

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CatalogCommand::List { all, available }) => list_products(all, available, ctx),
        Some(CatalogCommand::Show { id, qr }) => show_product(&id, qr.as_deref(), ctx),
        None => list_products(false, false, ctx),
    }
}

fn list_products(all: bool, available_only: bool, ctx: &Context) -> Result<()> {
    let listing = if all { Listing::All } else { Listing::Featured };
    let products: Vec<&Product> = listing
        .products(&ctx.catalog)
        .into_iter()
        .filter(|p| !available_only || p.available)
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(listing.title());
    ctx.output
        .table_row(&["ID", "PRODUCTO", "CATEGORÍA", "PRECIO", "ETIQUETAS"], &WIDTHS);

    for product in &products {
        let id = product.id.to_string();
        let price = product.price.display();
        let badges = badge_cell(&product.badges());
        ctx.output.table_row(
            &[&id, &product.name, &product.category, &price, &badges],
            &WIDTHS,
        );
    }

    println!();
    ctx.output.info(&listing.summary(&ctx.catalog));
    if Listing::hidden_count(&ctx.catalog) > 0 {
        let flag = if all { "sin --all" } else { "--all" };
        ctx.output
            .info(&format!("{} [{}]", listing.toggle_label(&ctx.catalog), flag));
    }

    Ok(())
}

#[derive(Serialize)]
struct ProductDetail<'a> {
    product: &'a Product,
    url: String,
}

fn show_product(id: &str, qr: Option<&str>, ctx: &Context) -> Result<()> {
    let Some(product) = ctx.catalog.find_by_route(id) else {
        bail!("Producto no encontrado: {}", id);
    };

    let url = product_url(&ctx.config.store.base_url, product.id);

    if let Some(path) = qr {
        let svg = qr_svg(&url)?;
        let path = ctx.resolve_path(path);
        std::fs::write(&path, svg)
            .with_context(|| format!("Failed to write QR code: {}", path.display()))?;
        ctx.output.success(&format!("QR code written to {}", path.display()));
    }

    if ctx.output.is_json() {
        ctx.output.json(&ProductDetail { product, url });
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Categoría", &product.category);
    ctx.output.kv("Precio", &price_line(product));

    let badges: Vec<String> = product.badges().into_iter().map(badge).collect();
    if !badges.is_empty() {
        ctx.output.kv("Etiquetas", &badges.join(" "));
    }

    let stock = if product.available {
        "Disponible"
    } else {
        "Sin Stock"
    };
    ctx.output.kv("Stock", stock);
    ctx.output
        .kv("Imágenes", &product.gallery().len().to_string());

    if !product.features.is_empty() {
        println!();
        ctx.output.info("Características:");
        for feature in &product.features {
            ctx.output.list_item(feature);
        }
    }

    println!();
    ctx.output.kv("Compartir", &url);

    Ok(())
}
