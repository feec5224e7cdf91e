use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::Price;

use crate::db::decimal_to_cents;

pub(crate) const PRODUCT_COLUMNS: &str = "id, name, description, price, image_url, images, category, stock, rating, review_count, features, is_active, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub category: String,
    pub stock: i32,
    pub rating: f64,
    pub review_count: i32,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = Price::from_cents(decimal_to_cents(&self.price)?)
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price,
            image_url: self.image_url,
            images: self.images,
            category: self.category,
            stock: u32::try_from(self.stock).unwrap_or_default(),
            rating: self.rating,
            review_count: u32::try_from(self.review_count).unwrap_or_default(),
            features: self.features,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
