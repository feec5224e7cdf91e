use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;

pub struct GetProductReviewsParams {
    pub product_id: Uuid,
}

#[async_trait]
pub trait GetProductReviewsUseCase: Send + Sync {
    async fn execute(&self, params: GetProductReviewsParams) -> Result<Vec<Review>, ReviewError>;
}
