//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use techstore_commerce::cart::{
    CartAction, CartPricing, CartState, DiscountPolicy, DiscountState, MAX_QUANTITY,
};
use techstore_commerce::catalog::Product;
use techstore_commerce::share::MessageComposer;
use techstore_commerce::{ProductId, SessionId};
use techstore_observability::{LogFormat, LogLevel, SessionLogger};

use super::cart::print_cart;
use super::ShopArgs;
use crate::context::Context;

const MENU: [&str; 9] = [
    "Agregar producto",
    "Cambiar cantidad",
    "Quitar producto",
    "Vaciar carrito",
    "Aplicar código de descuento",
    "Quitar código de descuento",
    "Ver carrito",
    "Enviar pedido",
    "Salir",
];

/// Cart and discount state for one session, with every change logged.
pub(crate) struct Session {
    cart: CartState,
    discounts: DiscountState,
    policy: DiscountPolicy,
    logger: SessionLogger,
}

impl Session {
    pub(crate) fn new(policy: DiscountPolicy, logger: SessionLogger) -> Self {
        Self {
            cart: CartState::new(),
            discounts: DiscountState::new(),
            policy,
            logger,
        }
    }

    pub(crate) fn cart(&self) -> &CartState {
        &self.cart
    }

    pub(crate) fn pricing(&self) -> CartPricing {
        CartPricing::compute(&self.cart, self.discounts.applied())
    }

    /// Add one unit. Returns false for out-of-stock products.
    pub(crate) fn add(&mut self, product: &Product) -> bool {
        let changed = self.cart.dispatch(CartAction::AddItem(product.clone()));
        let builder = if changed {
            self.logger.info_builder("item added")
        } else {
            self.logger.warn_builder("add rejected")
        };
        builder
            .field_i64("product_id", i64::from(product.id.get()))
            .field_bool("available", product.available)
            .field_i64("item_count", self.cart.item_count())
            .emit();
        changed
    }

    pub(crate) fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        let changed = self.cart.dispatch(CartAction::UpdateQuantity {
            product_id,
            quantity,
        });
        self.logger
            .info_builder("quantity updated")
            .field_i64("product_id", i64::from(product_id.get()))
            .field_i64("quantity", quantity)
            .field_bool("changed", changed)
            .emit();
        if quantity > MAX_QUANTITY {
            self.logger
                .debug_builder("quantity clamped")
                .field_i64("requested", quantity)
                .field_i64("max", MAX_QUANTITY)
                .emit();
        }
        changed
    }

    pub(crate) fn remove(&mut self, product_id: ProductId) -> bool {
        let changed = self.cart.dispatch(CartAction::RemoveItem(product_id));
        self.logger
            .info_builder("item removed")
            .field_i64("product_id", i64::from(product_id.get()))
            .field_bool("changed", changed)
            .emit();
        changed
    }

    pub(crate) fn clear(&mut self) {
        self.cart.dispatch(CartAction::ClearCart);
        self.logger.info("cart cleared");
    }

    /// Apply a code; the error message is returned for display.
    pub(crate) fn apply_code(&mut self, input: &str) -> Result<String, String> {
        match self.discounts.apply(&self.policy, input) {
            Ok(code) => {
                let code = code.code.clone();
                self.logger
                    .info_builder("code applied")
                    .field("code", code.as_str())
                    .emit();
                Ok(code)
            }
            Err(e) => {
                self.logger
                    .warn_builder("code rejected")
                    .field("input", input)
                    .emit();
                Err(e.to_string())
            }
        }
    }

    pub(crate) fn remove_code(&mut self) {
        self.discounts.remove();
        self.logger.info("code removed");
    }
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("`shop` is interactive; use `techstore cart` for JSON output");
    }

    let min_level = match (args.no_log, ctx.output.is_verbose()) {
        (true, _) => LogLevel::Error,
        (false, true) => LogLevel::Debug,
        (false, false) => LogLevel::Info,
    };
    let logger = SessionLogger::new(SessionId::generate())
        .with_view("shop")
        .with_format(LogFormat::Human)
        .with_min_level(min_level);
    logger.info("session started");

    let composer = ctx.config.message_composer();
    let mut session = Session::new(ctx.config.discount_policy(), logger);

    ctx.output
        .header(&format!("Bienvenido a {}", ctx.config.store.name));

    loop {
        let choice = Select::new()
            .with_prompt(format!(
                "Carrito: {} productos, {}",
                session.cart().item_count(),
                session.pricing().total.display()
            ))
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => add_product(ctx, &mut session)?,
            1 => change_quantity(ctx, &mut session)?,
            2 => remove_product(ctx, &mut session)?,
            3 => {
                if session.cart().is_empty() {
                    ctx.output.info("El carrito ya está vacío");
                } else if Confirm::new()
                    .with_prompt("¿Vaciar el carrito?")
                    .default(false)
                    .interact()?
                {
                    session.clear();
                    ctx.output.success("Carrito vaciado");
                }
            }
            4 => {
                let input: String = Input::new()
                    .with_prompt("Código de descuento")
                    .allow_empty(true)
                    .interact_text()?;
                match session.apply_code(&input) {
                    Ok(code) => ctx.output.success(&format!("Código {} aplicado", code)),
                    Err(_) => ctx.output.warn("Código de descuento inválido"),
                }
            }
            5 => {
                session.remove_code();
                ctx.output.info("Código de descuento quitado");
            }
            6 => print_cart(ctx, session.cart(), &session.pricing()),
            7 => send_order(ctx, &session, &composer),
            _ => break,
        }
    }

    session.logger.info("session ended");
    Ok(())
}

fn add_product(ctx: &Context, session: &mut Session) -> Result<()> {
    let products = ctx.catalog.all();
    let items: Vec<String> = products
        .iter()
        .map(|p| {
            let stock = if p.available { "" } else { " (Sin Stock)" };
            format!("{} - {}{}", p.name, p.price.display(), stock)
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Producto")
        .items(&items)
        .default(0)
        .interact()?;

    let product = &products[selection];
    if session.add(product) {
        ctx.output.success("✓ Agregado al carrito");
    } else {
        ctx.output.warn(&format!("{} está sin stock", product.name));
    }
    Ok(())
}

fn pick_line(session: &Session, prompt: &str) -> Result<Option<ProductId>> {
    let items = session.cart().items();
    if items.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = items
        .iter()
        .map(|i| format!("{} (x{})", i.name, i.quantity))
        .collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(items[selection].product_id))
}

fn change_quantity(ctx: &Context, session: &mut Session) -> Result<()> {
    let Some(product_id) = pick_line(session, "Producto")? else {
        ctx.output.info("Tu carrito está vacío");
        return Ok(());
    };

    let quantity: i64 = Input::new()
        .with_prompt("Cantidad (0 para quitar)")
        .interact_text()?;
    session.set_quantity(product_id, quantity);
    Ok(())
}

fn remove_product(ctx: &Context, session: &mut Session) -> Result<()> {
    let Some(product_id) = pick_line(session, "Quitar")? else {
        ctx.output.info("Tu carrito está vacío");
        return Ok(());
    };

    if session.remove(product_id) {
        ctx.output.success("Producto quitado");
    }
    Ok(())
}

fn send_order(ctx: &Context, session: &Session, composer: &MessageComposer) {
    if session.cart().is_empty() {
        ctx.output.warn("Agregá productos antes de enviar el pedido");
        return;
    }

    let link = composer.link(session.cart(), &session.pricing());
    session
        .logger
        .info_builder("order link generated")
        .field_i64("item_count", session.cart().item_count())
        .field("total", session.pricing().total.display())
        .emit();
    ctx.output.kv("Enviar pedido", &link);
}

#[cfg(test)]
mod tests {
    use super::*;
    use techstore_commerce::catalog::Catalog;

    fn session() -> Session {
        let logger = SessionLogger::new(SessionId::new("sess_test")).with_min_level(LogLevel::Error);
        Session::new(DiscountPolicy::default(), logger)
    }

    #[test]
    fn test_session_cart_operations() {
        let catalog = Catalog::bundled().unwrap();
        let mut session = session();
        let product = catalog.find(ProductId::new(3)).unwrap();

        assert!(session.add(product));
        assert!(session.add(product));
        assert_eq!(session.cart().item_count(), 2);

        assert!(session.set_quantity(product.id, 5));
        assert!(!session.set_quantity(product.id, 5));
        assert_eq!(session.pricing().subtotal, product.price * 5);

        assert!(session.remove(product.id));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_session_huge_quantity_is_capped() {
        let catalog = Catalog::bundled().unwrap();
        let logger = SessionLogger::new(SessionId::new("sess_test")).with_min_level(LogLevel::Debug);
        let mut session = Session::new(DiscountPolicy::default(), logger);
        let first = catalog.find(ProductId::new(1)).unwrap();
        let second = catalog.find(ProductId::new(2)).unwrap();
        session.add(first);
        session.add(second);

        assert!(session.set_quantity(first.id, i64::MAX));
        assert_eq!(session.cart().get(first.id).unwrap().quantity, MAX_QUANTITY);
        assert_eq!(session.cart().item_count(), MAX_QUANTITY + 1);
        assert_eq!(
            session.pricing().subtotal,
            first.price * MAX_QUANTITY + second.price
        );
    }

    #[test]
    fn test_session_rejects_out_of_stock() {
        let catalog = Catalog::bundled().unwrap();
        let mut session = session();
        let product = catalog.all().iter().find(|p| !p.available).unwrap();
        assert!(!session.add(product));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_session_codes() {
        let catalog = Catalog::bundled().unwrap();
        let mut session = session();
        session.add(catalog.find(ProductId::new(1)).unwrap());

        assert!(session.apply_code("nope").is_err());
        assert!(!session.pricing().has_discount());

        assert_eq!(session.apply_code("delfi").unwrap(), "DELFI");
        assert!(session.pricing().has_discount());

        session.clear();
        assert!(session.pricing().has_discount());
        assert!(session.pricing().discount.is_zero());

        session.remove_code();
        assert!(!session.pricing().has_discount());
    }
}
