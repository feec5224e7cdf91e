use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::{ProductPage, ProductQuery};

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, query: ProductQuery) -> Result<ProductPage, ProductError>;
}
