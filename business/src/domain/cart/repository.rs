use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::CartItem;

/// Per-user cart storage. Every method is scoped by the owner's id.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Lines in insertion order.
    async fn get_items(&self, user_id: &UserId) -> Result<Vec<CartItem>, RepositoryError>;
    /// Appends `item`, or adds its quantity to the existing line with the same
    /// id. The merge happens atomically; the stored line is returned.
    /// `NotFound` when the product no longer exists.
    async fn add_or_increment(&self, item: &CartItem) -> Result<CartItem, RepositoryError>;
    /// Fails with `NotFound` when the line does not exist.
    async fn set_quantity(
        &self,
        user_id: &UserId,
        id: Uuid,
        quantity: u32,
    ) -> Result<CartItem, RepositoryError>;
    /// `Ok(false)` when there was no such line; removing it is not an error.
    async fn remove(&self, user_id: &UserId, id: Uuid) -> Result<bool, RepositoryError>;
    /// Returns the number of removed lines.
    async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
}
