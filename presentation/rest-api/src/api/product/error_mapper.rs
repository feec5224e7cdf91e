use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_pair};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::NameEmpty
            | ProductError::CategoryEmpty
            | ProductError::InvalidPrice
            | ProductError::InvalidStock
            | ProductError::InvalidImageUrl
            | ProductError::InvalidPriceRange
            | ProductError::InvalidPagination => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        error_pair(status, name, self.to_string())
    }
}
