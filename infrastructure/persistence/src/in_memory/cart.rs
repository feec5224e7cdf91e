use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::database::InMemoryDatabase;

/// One list of lines per user. Each operation holds the write lock for its
/// whole read-modify-write.
#[derive(Default)]
pub struct InMemoryCartRepository {
    db: InMemoryDatabase,
}

impl InMemoryCartRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn get_items(&self, user_id: &UserId) -> Result<Vec<CartItem>, RepositoryError> {
        Ok(self
            .db
            .read()
            .await
            .carts
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_or_increment(&self, item: &CartItem) -> Result<CartItem, RepositoryError> {
        let mut tables = self.db.write().await;
        if !tables.has_product(item.id) {
            return Err(RepositoryError::NotFound);
        }
        let lines = tables.carts.entry(item.user_id).or_default();

        if let Some(existing) = lines.iter_mut().find(|line| line.id == item.id) {
            existing.merge(item.quantity);
            return Ok(existing.clone());
        }

        lines.push(item.clone());
        Ok(item.clone())
    }

    async fn set_quantity(
        &self,
        user_id: &UserId,
        id: Uuid,
        quantity: u32,
    ) -> Result<CartItem, RepositoryError> {
        let mut tables = self.db.write().await;
        let line = tables
            .carts
            .get_mut(user_id)
            .and_then(|lines| lines.iter_mut().find(|line| line.id == id))
            .ok_or(RepositoryError::NotFound)?;

        line.quantity = quantity;
        line.updated_at = Utc::now();
        Ok(line.clone())
    }

    async fn remove(&self, user_id: &UserId, id: Uuid) -> Result<bool, RepositoryError> {
        let mut tables = self.db.write().await;
        let Some(lines) = tables.carts.get_mut(user_id) else {
            return Ok(false);
        };
        let before = lines.len();
        lines.retain(|line| line.id != id);
        Ok(lines.len() < before)
    }

    async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let removed = self
            .db
            .write()
            .await
            .carts
            .remove(user_id)
            .unwrap_or_default();
        Ok(removed.len() as u64)
    }
}
