//! Mock checkout: validates the order form, simulates processing, and
//! empties the cart on confirmation.

use std::time::Duration;

use paperbloom_core::cart::Cart;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Delivery details collected at checkout.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl OrderForm {
    fn validate(&self) -> Result<(), CheckoutError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("postal code", &self.postal_code),
        ];

        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField(label));
            }
        }

        Ok(())
    }
}

/// A confirmed order. The total is captured before the cart is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    pub total: Decimal,
    pub item_count: u64,
}

/// Places the order: validates, waits out the simulated processing
/// delay, then clears the cart. The cart is left untouched on any
/// validation failure.
pub async fn place_order(
    cart: &mut Cart,
    form: &OrderForm,
    processing_delay: Duration,
) -> Result<OrderConfirmation, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    form.validate()?;

    tokio::time::sleep(processing_delay).await;

    let confirmation = OrderConfirmation {
        order_id: Uuid::new_v4(),
        total: cart.total(),
        item_count: cart.item_count(),
    };

    cart.clear();

    Ok(confirmation)
}
