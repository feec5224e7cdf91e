use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::user::model::User;

/// Public view of an account. The password hash is never included.
#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// "customer" or "admin"
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}
