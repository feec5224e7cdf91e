use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::PasswordHasher;
use crate::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::Email;
use crate::domain::user::model::{NewUserProps, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::value_objects::UserRole;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub struct RegisterUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    /// Addresses that receive the admin role on registration.
    pub admin_emails: Vec<Email>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<User, AuthError> {
        let email = Email::parse(&params.email).ok_or(AuthError::InvalidEmail)?;
        self.logger.info(&format!("Registering user: {}", email));

        if params.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword);
        }
        if params.first_name.trim().is_empty() || params.last_name.trim().is_empty() {
            return Err(AuthError::NameEmpty);
        }

        if self.repository.find_by_email(&email).await?.is_some() {
            self.logger
                .warn(&format!("Registration rejected, email in use: {}", email));
            return Err(AuthError::EmailTaken);
        }

        let password_hash = self.hasher.hash(&params.password).await?;
        let role = if self.admin_emails.contains(&email) {
            UserRole::Admin
        } else {
            UserRole::Customer
        };

        let user = User::new(NewUserProps {
            email,
            password_hash,
            first_name: params.first_name,
            last_name: params.last_name,
            role,
        });

        self.repository.create(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => AuthError::EmailTaken,
            other => AuthError::Repository(other),
        })?;

        self.logger
            .info(&format!("User registered: {} ({})", user.id, user.role));
        Ok(user)
    }
}
