use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::LoginResult;
use crate::domain::auth::services::{PasswordHasher, TokenService};
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::Email;
use crate::domain::user::repository::UserRepository;

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<LoginResult, AuthError> {
        let email = Email::parse(&params.email).ok_or(AuthError::InvalidCredentials)?;
        self.logger.info(&format!("Login attempt for {}", email));

        let Some(user) = self.repository.find_by_email(&email).await? else {
            self.hasher.verify_dummy(&params.password).await;
            self.logger
                .warn(&format!("Login failed, unknown email: {}", email));
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(&params.password, &user.password_hash).await? {
            self.logger
                .warn(&format!("Login failed, wrong password for user {}", user.id));
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;
        self.logger.info(&format!("User {} logged in", user.id));

        Ok(LoginResult { token, user })
    }
}
