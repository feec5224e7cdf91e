use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::Price;
use crate::domain::shared::value_objects::UserId;

/// Largest quantity a single line can hold.
pub const MAX_LINE_QUANTITY: u32 = i32::MAX as u32;

/// One cart line. `id` is the product id, so a cart never holds two lines
/// for the same product. Name, price and image are copied from the product
/// when the line is first added.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: Uuid,
    pub user_id: UserId,
    pub quantity: u32,
    pub name: String,
    pub price: Price,
    pub image_url: Option<String>,
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(user_id: UserId, product: &Product, quantity: u32) -> Result<Self, CartError> {
        validate_quantity(quantity)?;

        let now = Utc::now();
        Ok(Self {
            id: product.id,
            user_id,
            quantity,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            added_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        quantity: u32,
        name: String,
        price: Price,
        image_url: Option<String>,
        added_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            quantity,
            name,
            price,
            image_url,
            added_at,
            updated_at,
        }
    }

    /// Adds `quantity` to this line, capped at `MAX_LINE_QUANTITY`.
    pub fn merge(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity).min(MAX_LINE_QUANTITY);
        self.updated_at = Utc::now();
    }

    pub fn line_total_cents(&self) -> i64 {
        self.price.cents().saturating_mul(i64::from(self.quantity))
    }
}

/// Accepts 1..=`MAX_LINE_QUANTITY`.
pub fn validate_quantity(quantity: u32) -> Result<(), CartError> {
    if quantity == 0 || quantity > MAX_LINE_QUANTITY {
        return Err(CartError::InvalidQuantity);
    }
    Ok(())
}

/// A user's cart with derived totals.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn subtotal_cents(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.line_total_cents()))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
