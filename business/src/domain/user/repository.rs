use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{Email, UserId};

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;
    /// Fails with `Duplicated` when another user already has the same email.
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;
}
