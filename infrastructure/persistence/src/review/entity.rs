use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::review::model::Review;
use business::domain::review::value_objects::Rating;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ReviewEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ReviewEntity {
    pub fn into_domain(self) -> Result<Review, RepositoryError> {
        let rating = u8::try_from(self.rating)
            .ok()
            .and_then(|r| Rating::new(r).ok())
            .ok_or(RepositoryError::DatabaseError)?;

        Ok(Review::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.product_id,
            rating,
            self.comment,
            self.created_at,
        ))
    }
}
