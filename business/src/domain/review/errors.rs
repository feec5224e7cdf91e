#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("review.invalid_rating")]
    InvalidRating,
    #[error("review.comment_too_long")]
    CommentTooLong,
    #[error("review.product_not_found")]
    ProductNotFound,
    #[error("review.already_reviewed")]
    AlreadyReviewed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
