//! Product grid, product detail page and image carousel.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use techstore_commerce::cart::CartAction;
use techstore_commerce::catalog::{Badge, Listing, Product};
use techstore_commerce::share::{product_url, qr_svg};
use techstore_commerce::showcase::Carousel;

use crate::state::{CartStore, NoticeKind, Storefront};

/// How long the detail button shows its confirmation.
const ADDED_CONFIRMATION: Duration = Duration::from_millis(2000);

// ============================================================================
// Shared Pieces
// ============================================================================

/// Catalog images are either URLs or a glyph.
#[component]
pub fn ProductImage(src: String, alt: String) -> impl IntoView {
    if src.starts_with("http") || src.starts_with('/') {
        view! { <img src=src alt=alt loading="lazy"/> }.into_any()
    } else {
        view! { <span class="product-glyph" role="img" aria-label=alt>{src}</span> }.into_any()
    }
}

#[component]
pub fn BadgeList(badges: Vec<Badge>) -> impl IntoView {
    view! {
        <div class="badges">
            {badges
                .into_iter()
                .map(|badge| {
                    let class = format!("badge badge-{}", badge.as_str());
                    view! { <span class=class>{badge.label()}</span> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn PriceTag(product: Product) -> impl IntoView {
    let original = product.original_price.map(|p| p.display());
    let savings = product.savings_percent();

    view! {
        <div class="price-tag">
            <span class="price">{product.price.display()}</span>
            {original.map(|o| view! { <span class="original-price">{o}</span> })}
            {savings.map(|s| view! { <span class="savings">"-" {s} "%"</span> })}
        </div>
    }
}

// ============================================================================
// Product Grid
// ============================================================================

#[component]
pub fn ProductGrid() -> impl IntoView {
    let shop = expect_context::<Storefront>();
    let listing = RwSignal::new(Listing::default());

    let catalog = shop.catalog.clone();
    let products = move || {
        listing
            .get()
            .products(&catalog)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    let lead = move || match listing.get() {
        Listing::Featured => "Explorá nuestra selección de productos tecnológicos de última generación, diseñados para mejorar tu experiencia digital diaria.",
        Listing::All => "Explorá nuestra colección completa de productos tecnológicos premium.",
    };

    let catalog = shop.catalog.clone();
    let toggle_label = move || listing.get().toggle_label(&catalog);
    let catalog = shop.catalog.clone();
    let summary = move || listing.get().summary(&catalog);

    view! {
        <section id="productos" class="product-section">
            <h2>{move || listing.get().title()}</h2>
            <p class="muted">{lead}</p>
            <div class="products">
                <For
                    each=products
                    key=|product| product.id
                    children=move |product| view! { <ProductCard product=product/> }
                />
            </div>
            <button class="btn btn-outline" on:click=move |_| listing.update(|l| *l = l.toggle())>
                {toggle_label}
            </button>
            <p class="muted">{summary}</p>
        </section>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let store = expect_context::<CartStore>();
    let href = format!("/product/{}", product.id);
    let available = product.available;

    let add = {
        let product = product.clone();
        move |_| {
            if store.dispatch(CartAction::AddItem(product.clone())) {
                store.notify(NoticeKind::Success, "✓ Agregado al carrito");
            }
        }
    };

    view! {
        <div class="product-card" class:unavailable=!available>
            <a href=href.clone() class="product-media">
                <ProductImage src=product.image.clone() alt=product.name.clone()/>
            </a>
            <BadgeList badges=product.badges()/>
            <div class="product-info">
                <p class="muted">{product.category.clone()}</p>
                <h3><a href=href>{product.name.clone()}</a></h3>
                <ul class="feature-list">
                    {product
                        .features
                        .iter()
                        .map(|feature| view! { <li>"✓ " {feature.clone()}</li> })
                        .collect::<Vec<_>>()}
                </ul>
                <PriceTag product=product.clone()/>
                <button class="btn" disabled=!available on:click=add>
                    {if available { "Agregar al Carrito" } else { "Sin Stock" }}
                </button>
            </div>
        </div>
    }
}

// ============================================================================
// Product Detail
// ============================================================================

/// `/product/:id`
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let shop = expect_context::<Storefront>();
    let params = use_params_map();

    move || {
        let id = params.get().get("id").unwrap_or_default();
        match shop.catalog.find_by_route(&id) {
            Some(product) => view! { <ProductDetail product=product.clone()/> }.into_any(),
            None => view! {
                <div class="not-found">
                    <h1>"Producto no encontrado"</h1>
                    <a href="/" class="btn">"Volver al inicio"</a>
                </div>
            }
            .into_any(),
        }
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let store = expect_context::<CartStore>();
    let id = product.id;
    let available = product.available;
    let in_cart = move || store.cart.with(|cart| cart.contains(id));
    let just_added = RwSignal::new(false);

    let toggle = {
        let product = product.clone();
        move |_| {
            if !available {
                return;
            }
            if in_cart() {
                store.dispatch(CartAction::RemoveItem(id));
                just_added.set(false);
            } else if store.dispatch(CartAction::AddItem(product.clone())) {
                just_added.set(true);
                set_timeout(
                    move || {
                        let _ = just_added.try_set(false);
                    },
                    ADDED_CONFIRMATION,
                );
            }
        }
    };

    let label = move || {
        if !available {
            "Sin Stock"
        } else if just_added.get() {
            "✓ Agregado al carrito"
        } else if in_cart() {
            "Quitar del Carrito"
        } else {
            "Agregar al Carrito"
        }
    };

    view! {
        <main class="product-detail">
            <a href="/" class="back-link">"← Volver al inicio"</a>
            <div class="detail-grid">
                <ImageCarousel images=product.gallery() name=product.name.clone()/>
                <div>
                    <p class="muted">{product.category.clone()}</p>
                    <h1>{product.name.clone()}</h1>
                    <PriceTag product=product.clone()/>
                    <BadgeList badges=product.badges()/>
                    <h2>"Características:"</h2>
                    <ul class="feature-list">
                        {product
                            .features
                            .iter()
                            .map(|feature| view! { <li>"✓ " {feature.clone()}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                    <button
                        class="btn btn-large"
                        class:btn-danger=move || available && in_cart() && !just_added.get()
                        disabled=!available
                        on:click=toggle
                    >
                        {label}
                    </button>
                    <ShareBox product=product.clone()/>
                </div>
            </div>
        </main>
    }
}

/// QR code and copyable link for the current product.
#[component]
fn ShareBox(product: Product) -> impl IntoView {
    let shop = expect_context::<Storefront>();
    let origin = window()
        .location()
        .origin()
        .unwrap_or_else(|_| shop.config.store.base_url.clone());
    let url = product_url(&origin, product.id);

    let qr = match qr_svg(&url) {
        Ok(svg) => Some(svg),
        Err(e) => {
            leptos::logging::warn!("qr code for {}: {}", product.id, e);
            None
        }
    };

    let copied = RwSignal::new(false);
    let copy = {
        let url = url.clone();
        move |_| {
            let _ = window().navigator().clipboard().write_text(&url);
            copied.set(true);
            set_timeout(
                move || {
                    let _ = copied.try_set(false);
                },
                ADDED_CONFIRMATION,
            );
        }
    };

    view! {
        <div class="share">
            <h3>"Enlace a este producto"</h3>
            {qr.map(|svg| view! { <div class="qr" inner_html=svg></div> })}
            <p class="share-url">{url}</p>
            <button class="btn btn-outline" on:click=copy>
                {move || if copied.get() { "URL copiada al portapapeles" } else { "Copiar URL" }}
            </button>
        </div>
    }
}

// ============================================================================
// Image Carousel
// ============================================================================

#[component]
fn ImageCarousel(images: Vec<String>, name: String) -> impl IntoView {
    let count = images.len();
    let carousel = RwSignal::new(Carousel::new(images.clone()));
    let offset = move || format!("translateX(-{}%)", carousel.with(|c| c.offset_percent()));

    view! {
        <div class="carousel">
            <div class="carousel-viewport">
                <div class="carousel-track" style:transform=offset>
                    {images
                        .iter()
                        .enumerate()
                        .map(|(index, image)| {
                            let alt = format!("{} - Imagen {}", name, index + 1);
                            view! {
                                <div class="carousel-slide">
                                    <ProductImage src=image.clone() alt=alt/>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <Show when=move || { count > 1 }>
                    <button
                        class="carousel-prev"
                        aria-label="Imagen anterior"
                        on:click=move |_| carousel.update(|c| c.previous())
                    >
                        "‹"
                    </button>
                    <button
                        class="carousel-next"
                        aria-label="Siguiente imagen"
                        on:click=move |_| carousel.update(|c| c.next())
                    >
                        "›"
                    </button>
                </Show>
            </div>
            <Show when=move || { count > 1 }>
                <div class="carousel-dots">
                    {(0..count)
                        .map(|index| {
                            let label = format!("Ir a imagen {}", index + 1);
                            view! {
                                <button
                                    class="carousel-dot"
                                    class:active=move || carousel.with(|c| c.index() == index)
                                    aria-label=label
                                    on:click=move |_| carousel.update(|c| {
                                        c.go_to(index);
                                    })
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
