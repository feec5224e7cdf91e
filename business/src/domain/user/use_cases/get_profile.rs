use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct GetUserProfileParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetUserProfileUseCase: Send + Sync {
    async fn execute(&self, params: GetUserProfileParams) -> Result<User, UserError>;
}
