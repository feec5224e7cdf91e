use async_trait::async_trait;

use super::errors::AuthError;
use super::model::{AuthClaims, IssuedToken};
use crate::domain::user::model::User;

/// Service port for one-way password hashing. Hashing is CPU bound, so
/// adapters must not run it on the async executor threads.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError>;

    /// Costs the same as a real `verify` and discards the outcome. Used when
    /// there is no stored hash to check against.
    async fn verify_dummy(&self, password: &str);
}

/// Service port for signed bearer tokens.
pub trait TokenService: Send + Sync {
    fn issue(&self, user: &User) -> Result<IssuedToken, AuthError>;
    fn verify(&self, token: &str) -> Result<AuthClaims, AuthError>;
}
