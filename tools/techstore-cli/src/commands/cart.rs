//! Scripted cart session.

use anyhow::{anyhow, Context as _, Result};
use serde::Serialize;
use techstore_commerce::cart::{CartAction, CartPricing, CartState, DiscountPolicy, DiscountState};
use techstore_commerce::catalog::Catalog;
use techstore_commerce::ProductId;

use super::CartArgs;
use crate::context::Context;

const WIDTHS: [usize; 4] = [32, 10, 6, 10];

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let policy = ctx.config.discount_policy();
    let (cart, discounts, rejected) = apply_script(&args, &ctx.catalog, &policy)?;

    for note in &rejected {
        ctx.output.warn(note);
    }

    let pricing = CartPricing::compute(&cart, discounts.applied());
    let link = args
        .link
        .then(|| ctx.config.message_composer().link(&cart, &pricing));

    if ctx.output.is_json() {
        ctx.output.json(&CartReport {
            cart: &cart,
            pricing: &pricing,
            link: link.as_deref(),
        });
        return Ok(());
    }

    print_cart(ctx, &cart, &pricing);

    if let Some(link) = link {
        if cart.is_empty() {
            ctx.output.warn("El carrito está vacío; el enlace no incluye productos");
        }
        println!();
        ctx.output.kv("Enviar pedido", &link);
    }

    Ok(())
}

#[derive(Serialize)]
struct CartReport<'a> {
    cart: &'a CartState,
    pricing: &'a CartPricing,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,
}

/// Apply the flags in order: adds, quantity updates, removals, then the code.
///
/// Rejected operations (out-of-stock adds, an unknown code) are reported
/// back instead of failing the session; unknown products are errors.
pub(crate) fn apply_script(
    args: &CartArgs,
    catalog: &Catalog,
    policy: &DiscountPolicy,
) -> Result<(CartState, DiscountState, Vec<String>)> {
    let mut cart = CartState::new();
    let mut discounts = DiscountState::new();
    let mut rejected = Vec::new();

    for id in &args.add {
        let product = catalog.find(ProductId::new(*id))?;
        if !cart.dispatch(CartAction::AddItem(product.clone())) {
            rejected.push(format!("{} está sin stock", product.name));
        }
    }

    for entry in &args.set {
        let (product_id, quantity) = parse_quantity(entry)?;
        catalog.find(product_id)?;
        cart.dispatch(CartAction::UpdateQuantity {
            product_id,
            quantity,
        });
    }

    for id in &args.remove {
        cart.dispatch(CartAction::RemoveItem(ProductId::new(*id)));
    }

    if let Some(code) = &args.code {
        if let Err(e) = discounts.apply(policy, code) {
            rejected.push(e.to_string());
        }
    }

    Ok((cart, discounts, rejected))
}

/// Parse `<id>=<qty>`.
pub(crate) fn parse_quantity(entry: &str) -> Result<(ProductId, i64)> {
    let (id, qty) = entry
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected <id>=<qty>, got '{}'", entry))?;
    let id: ProductId = id
        .trim()
        .parse()
        .with_context(|| format!("Invalid product id in '{}'", entry))?;
    let qty: i64 = qty
        .trim()
        .parse()
        .with_context(|| format!("Invalid quantity in '{}'", entry))?;
    Ok((id, qty))
}

/// Print line items and the pricing summary.
pub(crate) fn print_cart(ctx: &Context, cart: &CartState, pricing: &CartPricing) {
    ctx.output.header(&format!(
        "Carrito de Compras ({} productos)",
        cart.item_count()
    ));

    if cart.is_empty() {
        ctx.output.info("Tu carrito está vacío");
        return;
    }

    ctx.output
        .table_row(&["PRODUCTO", "PRECIO", "CANT.", "TOTAL"], &WIDTHS);
    for item in cart.items() {
        let price = item.price.display();
        let quantity = item.quantity.to_string();
        let total = item.line_total().display();
        ctx.output
            .table_row(&[&item.name, &price, &quantity, &total], &WIDTHS);
    }

    println!();
    ctx.output.kv("Subtotal", &pricing.subtotal.display());
    if let Some(code) = &pricing.applied_code {
        ctx.output.kv(
            &format!("Descuento ({}, {}%)", code.code, code.percent),
            &format!("-{}", pricing.discount.display()),
        );
    }
    ctx.output.kv("Total", &pricing.total.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use techstore_commerce::cart::MAX_QUANTITY;

    fn args() -> CartArgs {
        CartArgs {
            add: Vec::new(),
            set: Vec::new(),
            remove: Vec::new(),
            code: None,
            link: false,
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3=2").unwrap(), (ProductId::new(3), 2));
        assert_eq!(parse_quantity(" 1 = -1 ").unwrap(), (ProductId::new(1), -1));
        assert!(parse_quantity("3").is_err());
        assert!(parse_quantity("x=2").is_err());
        assert!(parse_quantity("3=two").is_err());
    }

    #[test]
    fn test_script_applies_in_order() {
        let catalog = Catalog::bundled().unwrap();
        let mut args = args();
        args.add = vec![1, 2, 1];
        args.set = vec!["2=3".to_string()];
        args.remove = vec![1];
        args.code = Some("delfi".to_string());

        let (cart, discounts, rejected) =
            apply_script(&args, &catalog, &DiscountPolicy::default()).unwrap();

        assert!(rejected.is_empty());
        assert!(!cart.contains(ProductId::new(1)));
        assert_eq!(cart.get(ProductId::new(2)).unwrap().quantity, 3);
        assert!(discounts.is_applied());
    }

    #[test]
    fn test_script_huge_quantity_is_capped() {
        let catalog = Catalog::bundled().unwrap();
        let mut args = args();
        args.add = vec![1, 2];
        args.set = vec![format!("1={}", i64::MAX)];

        let (cart, _, rejected) =
            apply_script(&args, &catalog, &DiscountPolicy::default()).unwrap();

        assert!(rejected.is_empty());
        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.quantity, MAX_QUANTITY);
        assert_eq!(cart.item_count(), MAX_QUANTITY + 1);
        let expected: i64 = cart.items().iter().map(|i| i.price.amount_cents * i.quantity).sum();
        assert_eq!(cart.total().amount_cents, expected);
    }

    #[test]
    fn test_script_reports_rejections() {
        let catalog = Catalog::bundled().unwrap();
        let mut args = args();
        args.add = vec![4];
        args.code = Some("NOPE".to_string());

        let (cart, discounts, rejected) =
            apply_script(&args, &catalog, &DiscountPolicy::default()).unwrap();

        assert!(cart.is_empty());
        assert!(!discounts.is_applied());
        assert_eq!(rejected.len(), 2);
    }

    #[test]
    fn test_script_unknown_product_is_error() {
        let catalog = Catalog::bundled().unwrap();
        let mut args = args();
        args.add = vec![999];
        assert!(apply_script(&args, &catalog, &DiscountPolicy::default()).is_err());
    }
}
