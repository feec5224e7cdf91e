use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{CART_ITEM_COLUMNS, CartItemEntity};
use crate::db::{cents_to_decimal, map_database_error, to_db_int};

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_items(&self, user_id: &UserId) -> Result<Vec<CartItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(&format!(
            "SELECT {CART_ITEM_COLUMNS} FROM cart_items WHERE user_id = $1 ORDER BY added_at ASC"
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_database_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn add_or_increment(&self, item: &CartItem) -> Result<CartItem, RepositoryError> {
        // Single statement so concurrent adds of the same product both count.
        let entity = sqlx::query_as::<_, CartItemEntity>(&format!(
            r#"INSERT INTO cart_items (user_id, product_id, quantity, name, price, image_url, added_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id, product_id) DO UPDATE SET
                quantity = LEAST(cart_items.quantity::BIGINT + EXCLUDED.quantity, 2147483647)::INTEGER,
                updated_at = EXCLUDED.updated_at
            RETURNING {CART_ITEM_COLUMNS}"#
        ))
        .bind(item.user_id.as_uuid())
        .bind(item.id)
        .bind(to_db_int(item.quantity)?)
        .bind(&item.name)
        .bind(cents_to_decimal(item.price.cents()))
        .bind(&item.image_url)
        .bind(item.added_at)
        .bind(item.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_database_error)?;

        entity.into_domain()
    }

    async fn set_quantity(
        &self,
        user_id: &UserId,
        id: Uuid,
        quantity: u32,
    ) -> Result<CartItem, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(&format!(
            "UPDATE cart_items SET quantity = $3, updated_at = $4 WHERE user_id = $1 AND product_id = $2 RETURNING {CART_ITEM_COLUMNS}"
        ))
        .bind(user_id.as_uuid())
        .bind(id)
        .bind(to_db_int(quantity)?)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_database_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn remove(&self, user_id: &UserId, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND product_id = $2")
            .bind(user_id.as_uuid())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_database_error)?;

        Ok(result.rows_affected())
    }
}
