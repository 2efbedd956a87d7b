//! Shared storefront state, provided through Leptos context.

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use techstore_commerce::cart::{CartAction, CartPricing, CartState, DiscountState};
use techstore_commerce::catalog::Catalog;
use techstore_commerce::StoreConfig;

/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);

/// Read-only data every page needs.
#[derive(Clone)]
pub struct Storefront {
    pub catalog: Arc<Catalog>,
    pub config: Arc<StoreConfig>,
}

/// Kind of toast notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Cart, applied code and drawer visibility.
///
/// One instance is created by `App` and shared by every component, so
/// the header badge, the drawer and the detail page stay in sync.
#[derive(Clone, Copy)]
pub struct CartStore {
    pub cart: RwSignal<CartState>,
    pub discounts: RwSignal<DiscountState>,
    pub open: RwSignal<bool>,
    pub notice: RwSignal<Option<Notice>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(CartState::new()),
            discounts: RwSignal::new(DiscountState::new()),
            open: RwSignal::new(false),
            notice: RwSignal::new(None),
        }
    }

    /// Apply a cart action. Returns whether the cart changed.
    pub fn dispatch(&self, action: CartAction) -> bool {
        let mut changed = false;
        self.cart.update(|cart| changed = cart.dispatch(action));
        changed
    }

    /// Pricing for the current cart and code (reactive).
    pub fn pricing(&self) -> CartPricing {
        self.cart.with(|cart| {
            self.discounts
                .with(|discounts| CartPricing::compute(cart, discounts.applied()))
        })
    }

    /// Apply a code from the drawer input and show the outcome.
    pub fn apply_code(&self, config: &StoreConfig, input: &str) -> bool {
        let policy = config.discount_policy();
        let mut result = None;
        self.discounts.update(|discounts| {
            result = Some(discounts.apply(&policy, input).cloned());
        });

        match result {
            Some(Ok(code)) => {
                self.notify(
                    NoticeKind::Success,
                    format!(
                        "¡Código \"{}\" aplicado! {}% de descuento",
                        code.code, code.percent
                    ),
                );
                true
            }
            _ => {
                self.notify(NoticeKind::Error, "Código de descuento inválido");
                false
            }
        }
    }

    pub fn remove_code(&self) {
        self.discounts.update(|discounts| discounts.remove());
    }

    /// Show a toast that hides itself after [`NOTICE_DURATION`].
    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let notice = Notice {
            kind,
            message: message.into(),
        };
        self.notice.set(Some(notice.clone()));

        let slot = self.notice;
        set_timeout(
            move || {
                // A newer notice may have replaced this one.
                if slot.try_get_untracked().flatten().as_ref() == Some(&notice) {
                    let _ = slot.try_set(None);
                }
            },
            NOTICE_DURATION,
        );
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
