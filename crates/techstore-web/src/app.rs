//! Application shell, layout and pages.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use techstore_commerce::catalog::Catalog;
use techstore_commerce::StoreConfig;

use crate::cart::CartDrawer;
use crate::hero::Hero;
use crate::product::{ProductDetailPage, ProductGrid};
use crate::state::{CartStore, NoticeKind, Storefront};

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = match Catalog::bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            leptos::logging::error!("failed to load catalog: {}", e);
            return view! {
                <div style="text-align: center; padding: 4rem;">
                    <h1>"TechStore"</h1>
                    <p>"No pudimos cargar los productos. Intentá de nuevo más tarde."</p>
                </div>
            }
            .into_any();
        }
    };

    provide_context(Storefront {
        catalog: Arc::new(catalog),
        config: Arc::new(StoreConfig::default()),
    });
    provide_context(CartStore::new());

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="TechStore - Tecnología de calidad a tu alcance"/>
        <Title text="TechStore"/>

        <Router>
            <Header/>
            <Toast/>
            <Routes fallback>
                <Route path=path!("") view=HomePage/>
                <Route path=path!("/product/:id") view=ProductDetailPage/>
                <Route path=path!("/*any") view=NotFound/>
            </Routes>
            <Footer/>
        </Router>
    }
    .into_any()
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let location = leptos_router::hooks::use_location();
    let on_home = move || !location.pathname.get().starts_with("/product/");

    view! {
        <header class="site-header">
            <a href="/" class="logo">"TechStore"</a>
            <Show when=on_home>
                <nav>
                    <a href="#productos">"Productos"</a>
                    <a href="#caracteristicas">"Características"</a>
                </nav>
            </Show>
            <CartDrawer/>
        </header>
    }
}

/// Toast notices raised by the cart.
#[component]
fn Toast() -> impl IntoView {
    let store = expect_context::<CartStore>();

    view! {
        {move || store.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "toast toast-success",
                NoticeKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status">{notice.message}</div>
            }
        })}
    }
}

#[component]
fn Footer() -> impl IntoView {
    let shop = expect_context::<Storefront>();
    let name = shop.config.store.name.clone();

    view! {
        <footer class="site-footer">
            <p>{name} " - Tecnología de calidad a tu alcance"</p>
            <p style="font-size: 0.8rem; color: #888;">"Pedidos y consultas por WhatsApp"</p>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <main>
            <Hero/>
            <ProductGrid/>
            <Features/>
        </main>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"Página no encontrada"</p>
            <a href="/">"Volver al inicio"</a>
        </div>
    }
}

// ============================================================================
// Features
// ============================================================================

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "👌",
        title: "Confianza garantizada",
        description: "Todos nuestros productos son probados previamente para asegurar su calidad y funcionamiento.",
    },
    Feature {
        icon: "🔒",
        title: "Compra Segura con garantía",
        description: "Todas las compras cuentan con 7 días de cambio directo contra fallos de fábrica.",
    },
    Feature {
        icon: "💬",
        title: "Soporte y Asesoría",
        description: "No tenemos problema en ayudarte con cualquier consulta técnica. ¡Preguntá con confianza!",
    },
];

#[component]
fn Features() -> impl IntoView {
    let shop = expect_context::<Storefront>();
    let title = format!("¿Por qué elegir {}?", shop.config.store.name);

    view! {
        <section id="caracteristicas" class="features">
            <h2>{title}</h2>
            <p class="features-lead">
                "Productos tecnológicos de alta calidad que combinan innovación, funcionalidad y diseño sin destruir tu bolsillo."
            </p>
            <div class="features-grid">
                {FEATURES.iter().map(|feature| view! {
                    <div class="feature-card">
                        <div class="feature-icon">{feature.icon}</div>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
