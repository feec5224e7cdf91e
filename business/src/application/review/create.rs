use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::create::{CreateReviewParams, CreateReviewUseCase};

pub struct CreateReviewUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateReviewUseCase for CreateReviewUseCaseImpl {
    async fn execute(&self, params: CreateReviewParams) -> Result<Review, ReviewError> {
        self.logger.info(&format!(
            "User {} reviewing product {}",
            params.user_id, params.product_id
        ));

        let review = Review::new(
            params.user_id,
            params.product_id,
            params.rating,
            params.comment,
        )?;

        self.repository.create(&review).await.map_err(|e| match e {
            RepositoryError::Duplicated => ReviewError::AlreadyReviewed,
            RepositoryError::NotFound => ReviewError::ProductNotFound,
            other => ReviewError::Repository(other),
        })?;

        let product = self
            .product_repository
            .refresh_rating(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::ProductNotFound,
                other => ReviewError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Product {} rating is now {} over {} reviews",
            product.id, product.rating, product.review_count
        ));

        Ok(review)
    }
}
