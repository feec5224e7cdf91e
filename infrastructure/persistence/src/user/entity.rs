use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{Email, UserId};
use business::domain::user::model::User;
use business::domain::user::value_objects::UserRole;

pub(crate) const USER_COLUMNS: &str =
    "id, email, password_hash, first_name, last_name, role, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> Result<User, RepositoryError> {
        let email = Email::parse(&self.email).ok_or_else(|| {
            tracing::error!("Stored user {} has an invalid email", self.id);
            RepositoryError::DatabaseError
        })?;

        Ok(User {
            id: UserId::new(self.id),
            email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role.parse::<UserRole>().unwrap_or(UserRole::Customer),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
