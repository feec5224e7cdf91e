use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::{Email, UserId};
use crate::domain::user::model::User;
use crate::domain::user::value_objects::UserRole;

/// Identity carried by a verified bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthClaims {
    pub user_id: UserId,
    pub email: Email,
    pub role: UserRole,
    pub expires_at: DateTime<Utc>,
}

impl AuthClaims {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl IssuedToken {
    /// Whole seconds left before expiry, never negative.
    pub fn expires_in_seconds(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: IssuedToken,
    pub user: User,
}
