use chrono::{NaiveDateTime, Utc};

use crate::client::{store::cart::CartState, util::validate::is_valid_email};

/// Order placed at checkout, kept for the confirmation page
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedOrder {
    pub number: String,
    pub email: String,
    pub item_count: u32,
    pub total_cents: i64,
    pub placed_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckoutForm {
    pub email: String,
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CheckoutError {
    #[error("Your cart is empty")]
    EmptyCart,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if !is_valid_email(&self.email) {
            return Err(CheckoutError::InvalidEmail);
        }

        for (name, value) in [
            ("full name", &self.full_name),
            ("street", &self.street),
            ("city", &self.city),
            ("postcode", &self.postcode),
        ] {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField(name));
            }
        }

        Ok(())
    }

    /// Turn the cart into a placed order
    pub fn place(&self, cart: &CartState) -> Result<PlacedOrder, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.validate()?;

        let placed_at = Utc::now().naive_utc();

        Ok(PlacedOrder {
            number: format!("{:09}", placed_at.and_utc().timestamp_millis().rem_euclid(1_000_000_000)),
            email: self.email.trim().to_string(),
            item_count: cart.item_count(),
            total_cents: cart.subtotal_cents(),
            placed_at,
        })
    }
}
