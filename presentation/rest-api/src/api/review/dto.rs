use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::review::model::Review;

#[derive(Debug, Clone, Object)]
pub struct CreateReviewRequest {
    /// Star rating from 1 to 5
    pub rating: u8,
    /// Optional comment, at most 1000 characters
    #[oai(skip_serializing_if_is_none)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ReviewResponse {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub rating: u8,
    #[oai(skip_serializing_if_is_none)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            user_id: review.user_id.to_string(),
            product_id: review.product_id.to_string(),
            rating: review.rating.value(),
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}
