use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing line {} from cart of user {}",
            params.id, params.user_id
        ));

        if !self.repository.remove(&params.user_id, params.id).await? {
            self.logger
                .debug(&format!("Line {} was not in the cart", params.id));
        }

        let items = self.repository.get_items(&params.user_id).await?;
        Ok(Cart::new(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItem;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get_items(&self, user_id: &UserId) -> Result<Vec<CartItem>, RepositoryError>;
            async fn add_or_increment(&self, item: &CartItem) -> Result<CartItem, RepositoryError>;
            async fn set_quantity(&self, user_id: &UserId, id: Uuid, quantity: u32) -> Result<CartItem, RepositoryError>;
            async fn remove(&self, user_id: &UserId, id: Uuid) -> Result<bool, RepositoryError>;
            async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_remove_line_and_return_remaining_cart() {
        let line_id = Uuid::new_v4();
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_remove()
            .withf(move |_, id| *id == line_id)
            .times(1)
            .returning(|_, _| Ok(true));
        mock_repo.expect_get_items().returning(|_| Ok(vec![]));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(RemoveCartItemParams {
                user_id: UserId::generate(),
                id: line_id,
            })
            .await
            .unwrap();

        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn should_succeed_when_line_missing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_remove().returning(|_, _| Ok(false));
        mock_repo.expect_get_items().returning(|_| Ok(vec![]));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                user_id: UserId::generate(),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(result.is_ok());
    }
}
