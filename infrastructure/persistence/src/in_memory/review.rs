use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::review::model::Review;
use business::domain::review::repository::ReviewRepository;

use super::database::InMemoryDatabase;

#[derive(Default)]
pub struct InMemoryReviewRepository {
    db: InMemoryDatabase,
}

impl InMemoryReviewRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(&self, review: &Review) -> Result<(), RepositoryError> {
        let mut tables = self.db.write().await;
        if !tables.has_product(review.product_id) {
            return Err(RepositoryError::NotFound);
        }
        if tables
            .reviews
            .iter()
            .any(|r| r.user_id == review.user_id && r.product_id == review.product_id)
        {
            return Err(RepositoryError::Duplicated);
        }
        tables.reviews.push(review.clone());
        Ok(())
    }

    async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Review>, RepositoryError> {
        let mut reviews: Vec<Review> = self
            .db
            .read()
            .await
            .reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }
}
