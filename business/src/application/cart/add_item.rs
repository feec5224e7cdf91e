use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding {} x product {} to cart of user {}",
            params.quantity, params.product_id, params.user_id
        ));

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if !product.is_active {
            self.logger
                .warn(&format!("Product {} is not active", product.id));
            return Err(CartError::ProductNotFound);
        }

        let item = CartItem::new(params.user_id, &product, params.quantity)?;
        let stored = self
            .repository
            .add_or_increment(&item)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Cart line {} now has quantity {}",
            stored.id, stored.quantity
        ));

        let items = self.repository.get_items(&params.user_id).await?;
        Ok(Cart::new(items))
    }
}
