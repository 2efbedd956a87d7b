//! Cart button and drawer.

use leptos::prelude::*;
use techstore_commerce::cart::{CartAction, CartLineItem, MAX_QUANTITY};

use crate::state::{CartStore, Storefront};

#[component]
pub fn CartDrawer() -> impl IntoView {
    let store = expect_context::<CartStore>();
    let count = move || store.cart.with(|cart| cart.item_count());

    view! {
        <button class="cart-button" aria-label="Carrito" on:click=move |_| store.open.set(true)>
            "🛒"
            <Show when=move || { count() > 0 }>
                <span class="cart-count">{count}</span>
            </Show>
        </button>

        <Show when=move || store.open.get()>
            <div class="drawer-backdrop" on:click=move |_| store.open.set(false)></div>
            <aside class="drawer">
                <div class="drawer-header">
                    <h2>"Carrito de Compras"</h2>
                    <button on:click=move |_| store.open.set(false)>"✕"</button>
                </div>
                <Show
                    when=move || store.cart.with(|cart| !cart.is_empty())
                    fallback=move || view! {
                        <div class="drawer-empty">
                            <div style="font-size: 3rem;">"🛒"</div>
                            <p>"Tu carrito está vacío"</p>
                            <button on:click=move |_| store.open.set(false)>"Continuar comprando"</button>
                        </div>
                    }
                >
                    <CartItems/>
                    <DiscountForm/>
                    <CartSummary/>
                </Show>
            </aside>
        </Show>
    }
}

#[component]
fn CartItems() -> impl IntoView {
    let store = expect_context::<CartStore>();

    view! {
        <div class="drawer-items">
            <For
                each=move || store.cart.with(|cart| cart.items().to_vec())
                key=|item| (item.product_id, item.quantity)
                children=move |item| view! { <CartRow item=item/> }
            />
        </div>
    }
}

#[component]
fn CartRow(item: CartLineItem) -> impl IntoView {
    let store = expect_context::<CartStore>();
    let id = item.product_id;
    let quantity = item.quantity;

    let set_quantity = move |quantity: i64| {
        store.dispatch(CartAction::UpdateQuantity {
            product_id: id,
            quantity,
        });
    };

    view! {
        <div class="cart-row">
            <div class="cart-row-info">
                <h3>{item.name.clone()}</h3>
                <p class="muted">{item.category.clone()}</p>
                <p class="price">{item.price.display()}</p>
            </div>
            <div class="cart-row-qty">
                <button on:click=move |_| set_quantity(quantity - 1)>"-"</button>
                <span>{quantity}</span>
                <button
                    disabled=quantity >= MAX_QUANTITY
                    on:click=move |_| set_quantity(quantity + 1)
                >
                    "+"
                </button>
            </div>
            <button
                class="cart-row-remove"
                aria-label="Quitar"
                on:click=move |_| {
                    store.dispatch(CartAction::RemoveItem(id));
                }
            >
                "🗑"
            </button>
        </div>
    }
}

#[component]
fn DiscountForm() -> impl IntoView {
    let store = expect_context::<CartStore>();
    let shop = expect_context::<Storefront>();
    let input = RwSignal::new(String::new());

    let apply = move |_: leptos::ev::MouseEvent| {
        let code = input.get_untracked();
        if store.apply_code(&shop.config, &code) {
            input.set(String::new());
        }
    };

    view! {
        <div class="discount">
            <h3>"Código de Descuento"</h3>
            {move || match store.discounts.with(|d| d.applied().cloned()) {
                None => view! {
                    <div class="discount-form">
                        <input
                            type="text"
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev).to_uppercase())
                        />
                        <button
                            disabled=move || input.with(|code| code.trim().is_empty())
                            on:click=apply.clone()
                        >
                            "Aplicar"
                        </button>
                    </div>
                }
                .into_any(),
                Some(code) => view! {
                    <div class="discount-applied">
                        <div>
                            <p>"✓ " {code.code}</p>
                            <p class="muted">"-" {code.percent} "% aplicado"</p>
                        </div>
                        <button aria-label="Quitar código" on:click=move |_| store.remove_code()>"✕"</button>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn CartSummary() -> impl IntoView {
    let store = expect_context::<CartStore>();
    let shop = expect_context::<Storefront>();
    let composer = StoredValue::new(shop.config.message_composer());

    let pricing = Memo::new(move |_| store.pricing());
    let link = move || {
        store.cart.with(|cart| {
            composer.with_value(|composer| composer.link(cart, &pricing.get()))
        })
    };

    view! {
        <div class="summary">
            <div class="summary-row">
                <span>"Subtotal:"</span>
                <span>{move || pricing.get().subtotal.display()}</span>
            </div>
            <Show when=move || pricing.with(|p| p.has_discount())>
                <div class="summary-row discount-row">
                    <span>"Descuento (" {move || pricing.with(|p| p.discount_percent())} "%):"</span>
                    <span>"-" {move || pricing.get().discount.display()}</span>
                </div>
            </Show>
            <div class="summary-row total-row">
                <span>"Total:"</span>
                <span>{move || pricing.get().total.display()}</span>
            </div>
            <a class="btn btn-whatsapp" href=link target="_blank" rel="noopener">
                "Contactar por WhatsApp"
            </a>
            <button
                class="btn btn-secondary"
                on:click=move |_| {
                    store.dispatch(CartAction::ClearCart);
                }
            >
                "Vaciar Carrito"
            </button>
        </div>
    }
}
