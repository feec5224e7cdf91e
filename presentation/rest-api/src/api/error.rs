use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn json(name: &str, message: &str) -> Json<ErrorResponse> {
        Json(ErrorResponse {
            name: name.to_string(),
            message: message.to_string(),
        })
    }

    pub fn forbidden() -> Json<ErrorResponse> {
        Self::json("Forbidden", "auth.admin_required")
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Builds the error pair shared by every aggregate's mapper. `message` is the
/// error's code-style `Display`.
pub fn error_pair(status: StatusCode, name: &str, message: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            name: name.to_string(),
            message,
        }),
    )
}
