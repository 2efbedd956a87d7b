//! Rotating featured-product banner.

use leptos::prelude::*;
use techstore_commerce::cart::CartAction;
use techstore_commerce::showcase::{HeroEvent, HeroRotator};

use crate::product::{BadgeList, ProductImage};
use crate::state::{CartStore, NoticeKind, Storefront};

#[component]
pub fn Hero() -> impl IntoView {
    let shop = expect_context::<Storefront>();
    let store = expect_context::<CartStore>();

    let timing = shop.config.hero_timing();
    let tick = shop.config.progress_tick();
    let hero = RwSignal::new(HeroRotator::new(
        &shop.catalog,
        timing,
        &mut rand::thread_rng(),
    ));
    let pending_swap = StoredValue::new(None::<TimeoutHandle>);

    let progress_timer = set_interval_with_handle(
        move || {
            let _ = hero.try_update(|h| h.advance_progress(tick));
        },
        tick,
    );

    let rotation_timer = set_interval_with_handle(
        move || {
            let started = hero
                .try_update(|h| h.rotate(&mut rand::thread_rng()))
                .flatten();
            if let Some(HeroEvent::TransitionStarted { from, to }) = started {
                leptos::logging::log!("hero: {} -> {}", from, to);
                let swap = set_timeout_with_handle(
                    move || {
                        let _ = hero.try_update(|h| h.finish_transition());
                    },
                    timing.transition(),
                );
                pending_swap.set_value(swap.ok());
            }
        },
        timing.rotation(),
    );

    let progress_timer = progress_timer.ok();
    let rotation_timer = rotation_timer.ok();
    if progress_timer.is_none() || rotation_timer.is_none() {
        leptos::logging::warn!("hero: could not start rotation timers");
    }

    on_cleanup(move || {
        if let Some(handle) = progress_timer {
            handle.clear();
        }
        if let Some(handle) = rotation_timer {
            handle.clear();
        }
        if let Some(Some(handle)) = pending_swap.try_get_value() {
            handle.clear();
        }
    });

    // Progress ticks update `hero` often; only re-render the card on a swap.
    let current = Memo::new(move |_| hero.with(|h| h.current().cloned()));
    let transitioning = Memo::new(move |_| hero.with(|h| h.is_transitioning()));

    let fade = move || {
        if transitioning.get() {
            "hero-card fading"
        } else {
            "hero-card"
        }
    };

    view! {
        <section class="hero">
            <div class="hero-copy">
                <h1>"Tecnología" <span class="accent">" Premium"</span><br/>"para tu vida diaria"</h1>
                <p>
                    "Descubrí nuestra colección de auriculares Bluetooth, cargadores rápidos y accesorios tecnológicos de última generación. Calidad garantizada y diseño innovador."
                </p>
            </div>
            {move || match current.get() {
                None => view! { <div class="hero-card loading">"Cargando..."</div> }.into_any(),
                Some(product) => {
                    let href = format!("/product/{}", product.id);
                    let available = product.available;
                    let badges = product.hero_badges();
                    let original = product.original_price.map(|p| p.display());
                    let add = {
                        let product = product.clone();
                        move |_| {
                            if store.dispatch(CartAction::AddItem(product.clone())) {
                                store.notify(NoticeKind::Success, "✓ Agregado al carrito");
                            }
                        }
                    };
                    view! {
                        <div class=fade>
                            <a href=href class="hero-image">
                                <ProductImage src=product.image.clone() alt=product.name.clone()/>
                            </a>
                            <h3>{product.name.clone()}</h3>
                            <p class="muted">{product.category.clone()}</p>
                            <div class="hero-price">
                                <span class="price">{product.price.display()}</span>
                                {original.map(|o| view! { <span class="original-price">{o}</span> })}
                            </div>
                            <button class="btn" disabled=!available on:click=add>
                                {if available { "Agregar al Carrito" } else { "Sin Stock" }}
                            </button>
                            <BadgeList badges=badges/>
                        </div>
                    }
                    .into_any()
                }
            }}
            <div class="hero-progress">
                <div
                    class="hero-progress-bar"
                    style:width=move || format!("{}%", hero.with(|h| h.progress()))
                ></div>
                <p class="muted">
                    "Próximo producto en " {move || hero.with(|h| h.seconds_remaining())} " segundos"
                </p>
            </div>
        </section>
    }
}
