use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_profile::{GetUserProfileParams, GetUserProfileUseCase};

pub struct GetUserProfileUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserProfileUseCase for GetUserProfileUseCaseImpl {
    async fn execute(&self, params: GetUserProfileParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Fetching profile of user {}", params.user_id));

        self.repository
            .get_by_id(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })
    }
}
