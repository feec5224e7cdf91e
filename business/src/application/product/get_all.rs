use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::product::value_objects::{ProductPage, ProductQuery};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, query: ProductQuery) -> Result<ProductPage, ProductError> {
        query.validate()?;

        self.logger.info("Fetching active products");
        let products = self.repository.get_active_products().await?;
        let page = query.apply(products);
        self.logger.info(&format!(
            "Returning {} of {} matching products",
            page.items.len(),
            page.total
        ));
        Ok(page)
    }
}
