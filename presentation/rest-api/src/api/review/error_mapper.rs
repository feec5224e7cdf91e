use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::review::errors::ReviewError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_pair};

impl IntoErrorResponse for ReviewError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ReviewError::InvalidRating | ReviewError::CommentTooLong => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            ReviewError::ProductNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ReviewError::AlreadyReviewed => (StatusCode::CONFLICT, "Conflict"),
            ReviewError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        error_pair(status, name, self.to_string())
    }
}
