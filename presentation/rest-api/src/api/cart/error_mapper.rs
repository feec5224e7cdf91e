use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_pair};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::InvalidQuantity => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::ProductNotFound | CartError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            CartError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        error_pair(status, name, self.to_string())
    }
}
