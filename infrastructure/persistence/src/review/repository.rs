use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::review::model::Review;
use business::domain::review::repository::ReviewRepository;

use super::entity::ReviewEntity;
use crate::db::map_database_error;

pub struct ReviewRepositoryPostgres {
    pool: PgPool,
}

impl ReviewRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn create(&self, review: &Review) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO reviews (id, user_id, product_id, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(review.id)
        .bind(review.user_id.as_uuid())
        .bind(review.product_id)
        .bind(i16::from(review.rating.value()))
        .bind(&review.comment)
        .bind(review.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_database_error)?;

        Ok(())
    }

    async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Review>, RepositoryError> {
        let entities = sqlx::query_as::<_, ReviewEntity>(
            "SELECT id, user_id, product_id, rating, comment, created_at FROM reviews WHERE product_id = $1 ORDER BY created_at DESC",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_database_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }
}
