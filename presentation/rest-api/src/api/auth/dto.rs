use poem_openapi::Object;

use business::domain::auth::model::LoginResult;

use crate::api::user::dto::UserResponse;

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    pub email: String,
    /// At least 8 characters
    #[oai(write_only)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    #[oai(write_only)]
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginResponse {
    /// Signed bearer token for the `Authorization` header
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    pub user: UserResponse,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            expires_in: result.token.expires_in_seconds(),
            access_token: result.token.access_token,
            token_type: "Bearer".to_string(),
            user: result.user.into(),
        }
    }
}
