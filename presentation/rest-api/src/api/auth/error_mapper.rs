use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_pair};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            AuthError::InvalidEmail | AuthError::WeakPassword | AuthError::NameEmpty => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            AuthError::EmailTaken => (StatusCode::CONFLICT, "Conflict"),
            AuthError::InvalidCredentials | AuthError::InvalidToken | AuthError::TokenExpired => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            AuthError::HashingFailed
            | AuthError::TokenSigningFailed
            | AuthError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        error_pair(status, name, self.to_string())
    }
}
