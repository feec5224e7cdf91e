use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Option<Product>, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        match self.repository.get_by_id(params.id).await {
            Ok(product) => Ok(Some(product)),
            Err(RepositoryError::NotFound) => {
                self.logger
                    .debug(&format!("Product {} does not exist", params.id));
                Ok(None)
            }
            Err(other) => Err(ProductError::Repository(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_active_products(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn refresh_rating(&self, id: Uuid) -> Result<Product, RepositoryError>;
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
    async fn should_return_product_when_exists() {
        let product = Product::new(NewProductProps {
            name: "Trail Running Shoes".to_string(),
            description: String::new(),
            price_cents: 12_000,
            image_url: None,
            images: vec![],
            category: "footwear".to_string(),
            stock: 3,
            features: vec![],
            is_active: true,
        })
        .unwrap();
        let product_id = product.id;

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == product_id)
            .returning(move |_| Ok(product.clone()));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: product_id })
            .await
            .unwrap();

        assert_eq!(result.unwrap().name, "Trail Running Shoes");
    }

    #[tokio::test]
    async fn should_return_none_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_fail_when_repository_unavailable() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
