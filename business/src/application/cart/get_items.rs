use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_items::{GetCartItemsParams, GetCartItemsUseCase};
use crate::domain::logger::Logger;

pub struct GetCartItemsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartItemsUseCase for GetCartItemsUseCaseImpl {
    async fn execute(&self, params: GetCartItemsParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Getting cart of user {}", params.user_id));
        let items = self.repository.get_items(&params.user_id).await?;
        self.logger
            .info(&format!("Retrieved {} cart lines", items.len()));
        Ok(Cart::new(items))
    }
}
