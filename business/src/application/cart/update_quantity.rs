use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, validate_quantity};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of line {} to {}",
            params.id, params.quantity
        ));

        if params.quantity == 0 {
            if !self.repository.remove(&params.user_id, params.id).await? {
                self.logger
                    .warn(&format!("Line {} is not in the cart", params.id));
                return Err(CartError::ItemNotFound);
            }
        } else {
            validate_quantity(params.quantity)?;
            self.repository
                .set_quantity(&params.user_id, params.id, params.quantity)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => CartError::ItemNotFound,
                    other => CartError::Repository(other),
                })?;
        }

        let items = self.repository.get_items(&params.user_id).await?;
        Ok(Cart::new(items))
    }
}
