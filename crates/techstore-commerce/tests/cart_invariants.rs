//! End-to-end checks of the cart against the bundled catalog.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use techstore_commerce::prelude::*;

fn recomputed_total(cart: &CartState) -> i64 {
    cart.items()
        .iter()
        .map(|i| i.price.amount_cents * i.quantity)
        .sum()
}

fn random_action(rng: &mut StdRng, catalog: &Catalog) -> CartAction {
    let products = catalog.all();
    let product = &products[rng.gen_range(0..products.len())];
    match rng.gen_range(0..10) {
        0..=4 => CartAction::AddItem(product.clone()),
        5 | 6 => CartAction::UpdateQuantity {
            product_id: product.id,
            quantity: rng.gen_range(-2..8),
        },
        7 | 8 => CartAction::RemoveItem(product.id),
        _ => CartAction::ClearCart,
    }
}

#[test]
fn test_totals_match_line_items_for_random_sequences() {
    let catalog = Catalog::bundled().unwrap();

    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cart = CartState::new();

        for _ in 0..200 {
            let action = random_action(&mut rng, &catalog);
            cart = cart.reduce(action);

            assert_eq!(cart.total().amount_cents, recomputed_total(&cart));
            assert_eq!(
                cart.item_count(),
                cart.items().iter().map(|i| i.quantity).sum::<i64>()
            );
            assert!(cart.items().iter().all(|i| i.quantity >= 1));

            let mut ids: Vec<ProductId> = cart.items().iter().map(|i| i.product_id).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), cart.unique_item_count());

            assert!(cart
                .items()
                .iter()
                .all(|i| catalog.get(i.product_id).map_or(false, |p| p.available)));
        }
    }
}

#[test]
fn test_unavailable_products_never_enter_cart() {
    let catalog = Catalog::bundled().unwrap();
    let mut cart = CartState::new();
    for product in catalog.all().iter().filter(|p| !p.available) {
        assert!(!cart.dispatch(CartAction::AddItem(product.clone())));
    }
    assert!(cart.is_empty());
}

#[test]
fn test_checkout_message_with_bundled_catalog() {
    let catalog = Catalog::bundled().unwrap();
    let config = StoreConfig::default();

    let headphones = catalog.find(ProductId::new(1)).unwrap().clone();
    let charger = catalog.find(ProductId::new(2)).unwrap().clone();

    let cart = CartState::new()
        .reduce(CartAction::AddItem(headphones.clone()))
        .reduce(CartAction::AddItem(charger))
        .reduce(CartAction::AddItem(headphones));
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total().display(), "$224.98");

    let mut discounts = DiscountState::new();
    assert!(discounts.apply(&config.discount_policy(), "bogus").is_err());
    discounts.apply(&config.discount_policy(), " Delfi ").unwrap();

    let pricing = CartPricing::compute(&cart, discounts.applied());
    assert_eq!(pricing.discount.display(), "$11.25");
    assert_eq!(pricing.total.display(), "$213.73");

    let message = config.message_composer().compose(&cart, &pricing);
    assert!(message.contains("- *Auriculares Bluetooth Pro* por $*89.99* (x2)"));
    assert!(message.contains("- *Cargador Rápido GaN 65W* por $*45* (x1)"));
    assert!(message.contains("Total con descuento: $*213.73*"));
}

#[test]
fn test_detail_route_resolution() {
    let catalog = Catalog::bundled().unwrap();
    assert!(catalog.find_by_route("1").is_some());
    assert!(catalog.find_by_route("999").is_none());
    assert!(catalog.find_by_route("abc").is_none());

    let product = catalog.find_by_route("5").unwrap();
    let url = product_url("https://techstore.example", product.id);
    assert!(qr_svg(&url).is_ok());
    assert!(product.gallery().len() > 1);
}

#[test]
fn test_hero_rotates_over_available_products_only() {
    let catalog = Catalog::bundled().unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let mut hero = HeroRotator::new(&catalog, HeroTiming::default(), &mut rng);

    let mut shown = Vec::new();
    for _ in 0..600 {
        for event in hero.tick(std::time::Duration::from_millis(100), &mut rng) {
            if let HeroEvent::ProductShown(id) = event {
                shown.push(id);
            }
        }
    }

    assert!(!shown.is_empty());
    assert!(shown
        .iter()
        .all(|id| catalog.get(*id).map_or(false, |p| p.available)));
    assert!(shown.windows(2).all(|w| w[0] != w[1]));
}
