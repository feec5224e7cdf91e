use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::database::InMemoryDatabase;

#[derive(Default)]
pub struct InMemoryProductRepository {
    db: InMemoryDatabase,
}

impl InMemoryProductRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self::new(InMemoryDatabase::with_products(products))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_active_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let tables = self.db.read().await;
        let mut active: Vec<Product> = tables
            .products
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(active)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.db
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut tables = self.db.write().await;
        match tables.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => tables.products.push(product.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut guard = self.db.write().await;
        let tables = &mut *guard;

        let before = tables.products.len();
        tables.products.retain(|p| p.id != id);
        if tables.products.len() == before {
            return Err(RepositoryError::NotFound);
        }

        for lines in tables.carts.values_mut() {
            lines.retain(|line| line.id != id);
        }
        tables.reviews.retain(|r| r.product_id != id);
        Ok(())
    }

    async fn refresh_rating(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let mut guard = self.db.write().await;
        let tables = &mut *guard;

        let ratings: Vec<u8> = tables
            .reviews
            .iter()
            .filter(|r| r.product_id == id)
            .map(|r| r.rating.value())
            .collect();
        let product = tables
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        product.apply_review_ratings(&ratings);
        Ok(product.clone())
    }
}
