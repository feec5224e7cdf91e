use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::{PRODUCT_COLUMNS, ProductEntity};
use crate::db::{cents_to_decimal, map_database_error, to_db_int};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_active_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE is_active = TRUE ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_database_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_database_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, description, price, image_url, images, category, stock, rating, review_count, features, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                image_url = EXCLUDED.image_url,
                images = EXCLUDED.images,
                category = EXCLUDED.category,
                stock = EXCLUDED.stock,
                rating = EXCLUDED.rating,
                review_count = EXCLUDED.review_count,
                features = EXCLUDED.features,
                is_active = EXCLUDED.is_active,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(cents_to_decimal(product.price.cents()))
        .bind(&product.image_url)
        .bind(&product.images)
        .bind(&product.category)
        .bind(to_db_int(product.stock)?)
        .bind(product.rating)
        .bind(to_db_int(product.review_count)?)
        .bind(&product.features)
        .bind(product.is_active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_database_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn refresh_rating(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"UPDATE products SET
                rating = COALESCE(
                    (SELECT ROUND(AVG(reviews.rating)::NUMERIC, 2)::DOUBLE PRECISION FROM reviews WHERE reviews.product_id = $1),
                    0
                ),
                review_count = (SELECT COUNT(*)::INTEGER FROM reviews WHERE reviews.product_id = $1),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_database_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }
}
