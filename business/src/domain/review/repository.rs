use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Review;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Fails with `Duplicated` when the user already reviewed the product
    /// and with `NotFound` when the product does not exist.
    async fn create(&self, review: &Review) -> Result<(), RepositoryError>;
    /// Reviews of one product, newest first.
    async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Review>, RepositoryError>;
}
