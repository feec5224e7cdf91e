use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ReviewError;
use super::value_objects::{MAX_COMMENT_LENGTH, Rating};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub user_id: UserId,
    pub product_id: Uuid,
    pub rating: Rating,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// A blank comment is stored as no comment.
    pub fn new(
        user_id: UserId,
        product_id: Uuid,
        rating: u8,
        comment: Option<String>,
    ) -> Result<Self, ReviewError> {
        let rating = Rating::new(rating)?;

        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if let Some(c) = &comment
            && c.chars().count() > MAX_COMMENT_LENGTH
        {
            return Err(ReviewError::CommentTooLong);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            rating,
            comment,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        product_id: Uuid,
        rating: Rating,
        comment: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            product_id,
            rating,
            comment,
            created_at,
        }
    }
}
