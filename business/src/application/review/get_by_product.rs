use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::get_by_product::{
    GetProductReviewsParams, GetProductReviewsUseCase,
};

pub struct GetProductReviewsUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductReviewsUseCase for GetProductReviewsUseCaseImpl {
    async fn execute(&self, params: GetProductReviewsParams) -> Result<Vec<Review>, ReviewError> {
        self.logger
            .info(&format!("Fetching reviews of product {}", params.product_id));

        self.product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::ProductNotFound,
                other => ReviewError::Repository(other),
            })?;

        let reviews = self.repository.get_by_product(params.product_id).await?;
        self.logger.debug(&format!("Found {} reviews", reviews.len()));

        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ReviewRepo {}

        #[async_trait]
        impl ReviewRepository for ReviewRepo {
            async fn create(&self, review: &Review) -> Result<(), RepositoryError>;
            async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Review>, RepositoryError>;
        }
    }

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

    fn product() -> Product {
        Product::new(NewProductProps {
            name: "Trail Shoes".to_string(),
            description: String::new(),
            price_cents: 8_900,
            image_url: None,
            images: vec![],
            category: "outdoor".to_string(),
            stock: 7,
            features: vec![],
            is_active: true,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_reviews_of_existing_product() {
        let product = product();
        let product_id = product.id;

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(move |_| Ok(product.clone()));

        let mut review_repo = MockReviewRepo::new();
        review_repo.expect_get_by_product().returning(|id| {
            Ok(vec![
                Review::new(UserId::generate(), id, 5, None).unwrap(),
                Review::new(UserId::generate(), id, 2, Some("Too small".to_string())).unwrap(),
            ])
        });

        let use_case = GetProductReviewsUseCaseImpl {
            repository: Arc::new(review_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let reviews = use_case
            .execute(GetProductReviewsParams { product_id })
            .await
            .unwrap();

        assert_eq!(reviews.len(), 2);
        assert!(reviews.iter().all(|r| r.product_id == product_id));
    }

    #[tokio::test]
    async fn should_fail_when_product_missing() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let mut review_repo = MockReviewRepo::new();
        review_repo.expect_get_by_product().never();

        let use_case = GetProductReviewsUseCaseImpl {
            repository: Arc::new(review_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductReviewsParams {
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReviewError::ProductNotFound));
    }
}
