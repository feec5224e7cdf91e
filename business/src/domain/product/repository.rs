use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products with `is_active = true`, newest first.
    async fn get_active_products(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Inserts or replaces the product with the same id.
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Removes the product together with its cart lines and reviews.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Recomputes `rating` and `review_count` from the stored reviews in one
    /// step and returns the updated product. `NotFound` when the product is gone.
    async fn refresh_rating(&self, id: Uuid) -> Result<Product, RepositoryError>;
}
