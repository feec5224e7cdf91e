use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            price_cents: params.price_cents,
            image_url: params.image_url,
            images: params.images,
            category: params.category,
            stock: params.stock,
            features: params.features,
            is_active: params.is_active,
        })?;

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
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

    fn params(name: &str) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            description: "Stainless steel, 1.7L".to_string(),
            price_cents: 3_999,
            image_url: Some("https://cdn.example.com/kettle.png".to_string()),
            images: vec![],
            category: "kitchen".to_string(),
            stock: 20,
            features: vec!["Auto shut-off".to_string()],
            is_active: true,
        }
    }

    #[tokio::test]
    async fn should_create_product_when_valid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .withf(|p| p.name == "Electric Kettle")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case.execute(params("Electric Kettle")).await.unwrap();

        assert_eq!(product.name, "Electric Kettle");
        assert_eq!(product.price.cents(), 3_999);
        assert!(product.is_active);
    }

    #[tokio::test]
    async fn should_not_save_when_name_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("")).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_surface_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Electric Kettle")).await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
