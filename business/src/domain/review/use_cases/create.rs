use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::shared::value_objects::UserId;

pub struct CreateReviewParams {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub rating: u8,
    pub comment: Option<String>,
}

#[async_trait]
pub trait CreateReviewUseCase: Send + Sync {
    async fn execute(&self, params: CreateReviewParams) -> Result<Review, ReviewError>;
}
