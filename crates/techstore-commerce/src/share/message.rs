//! Outbound order message for the store's messaging contact.
//!
//! The cart is formatted as a pre-filled chat message and percent-encoded
//! into a click-to-chat link. Opening the link is left to the caller.

use crate::cart::{CartPricing, CartState};

/// Default click-to-chat endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://wa.me";

/// Builds click-to-chat links for a store contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageComposer {
    endpoint: String,
    phone: String,
}

impl MessageComposer {
    /// Create a composer for a phone number in international format,
    /// digits only.
    pub fn new(endpoint: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            phone: phone.into(),
        }
    }

    /// Plain-text message listing the cart.
    pub fn compose(&self, cart: &CartState, pricing: &CartPricing) -> String {
        let lines: Vec<String> = cart
            .items()
            .iter()
            .map(|item| {
                format!(
                    "- *{}* por $*{}* (x{})",
                    item.name,
                    item.price.display_plain(),
                    item.quantity
                )
            })
            .collect();

        let mut message = format!(
            "¡Hola! Estoy interesado en los siguientes productos:\n{}\n\nSubtotal: $*{}*",
            lines.join("\n"),
            pricing.subtotal.display_amount()
        );

        if let Some(code) = &pricing.applied_code {
            message.push_str(&format!(
                "\nCódigo de descuento: *{}* (-{}%)\nDescuento: -$*{}*\nTotal con descuento: $*{}*",
                code.code,
                code.percent,
                pricing.discount.display_amount(),
                pricing.total.display_amount()
            ));
        }

        message
    }

    /// Link that opens a chat with the message pre-filled.
    pub fn link(&self, cart: &CartState, pricing: &CartPricing) -> String {
        let message = self.compose(cart, pricing);
        format!(
            "{}/{}?text={}",
            self.endpoint,
            self.phone,
            urlencoding::encode(&message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartAction, DiscountPolicy, DiscountState};
    use crate::catalog::product::tests::sample;
    use crate::ids::ProductId;

    fn cart() -> CartState {
        let mut first = sample(1, 1000, true);
        first.name = "Auriculares".to_string();
        let mut second = sample(2, 550, true);
        second.name = "Cable".to_string();

        let mut cart = CartState::new();
        cart.dispatch(CartAction::AddItem(first));
        cart.dispatch(CartAction::AddItem(second));
        cart.dispatch(CartAction::UpdateQuantity {
            product_id: ProductId::new(1),
            quantity: 2,
        });
        cart
    }

    fn composer() -> MessageComposer {
        MessageComposer::new("https://wa.me/", "5493816378884")
    }

    #[test]
    fn test_compose_without_code() {
        let cart = cart();
        let pricing = CartPricing::compute(&cart, None);
        let message = composer().compose(&cart, &pricing);
        assert_eq!(
            message,
            "¡Hola! Estoy interesado en los siguientes productos:\n\
             - *Auriculares* por $*10* (x2)\n\
             - *Cable* por $*5.5* (x1)\n\
             \n\
             Subtotal: $*25.50*"
        );
    }

    #[test]
    fn test_compose_with_code() {
        let cart = cart();
        let mut discounts = DiscountState::new();
        discounts.apply(&DiscountPolicy::default(), "delfi").unwrap();
        let pricing = CartPricing::compute(&cart, discounts.applied());

        let message = composer().compose(&cart, &pricing);
        assert!(message.ends_with(
            "Subtotal: $*25.50*\n\
             Código de descuento: *DELFI* (-5%)\n\
             Descuento: -$*1.28*\n\
             Total con descuento: $*24.22*"
        ));
    }

    #[test]
    fn test_link_is_encoded() {
        let cart = cart();
        let pricing = CartPricing::compute(&cart, None);
        let link = composer().link(&cart, &pricing);

        assert!(link.starts_with("https://wa.me/5493816378884?text="));
        let text = link.split_once("?text=").map(|(_, t)| t).unwrap();
        assert!(!text.contains(' '));
        assert!(!text.contains('\n'));
        assert!(text.contains("%0A"));
        assert_eq!(
            urlencoding::decode(text).unwrap(),
            composer().compose(&cart, &pricing)
        );
    }
}
