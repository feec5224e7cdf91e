use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::errors::RepositoryError;
use business::domain::product::value_objects::Price;
use business::domain::shared::value_objects::UserId;

use crate::db::decimal_to_cents;

pub(crate) const CART_ITEM_COLUMNS: &str =
    "user_id, product_id, quantity, name, price, image_url, added_at, updated_at";

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub name: String,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartItemEntity {
    pub fn into_domain(self) -> Result<CartItem, RepositoryError> {
        let price = Price::from_cents(decimal_to_cents(&self.price)?)
            .map_err(|_| RepositoryError::DatabaseError)?;
        let quantity = u32::try_from(self.quantity).map_err(|_| RepositoryError::DatabaseError)?;

        Ok(CartItem::from_repository(
            self.product_id,
            UserId::new(self.user_id),
            quantity,
            self.name,
            price,
            self.image_url,
            self.added_at,
            self.updated_at,
        ))
    }
}
