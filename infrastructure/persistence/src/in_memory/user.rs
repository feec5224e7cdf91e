use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{Email, UserId};
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::database::InMemoryDatabase;

#[derive(Default)]
pub struct InMemoryUserRepository {
    db: InMemoryDatabase,
}

impl InMemoryUserRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.db.read().await.users.clone())
    }

    async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError> {
        self.db
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == *id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .db
            .read()
            .await
            .users
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        let mut tables = self.db.write().await;
        if tables
            .users
            .iter()
            .any(|u| u.email == user.email || u.id == user.id)
        {
            return Err(RepositoryError::Duplicated);
        }
        tables.users.push(user.clone());
        Ok(())
    }
}
