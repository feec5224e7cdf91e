use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::product::model::Product;
use business::domain::review::model::Review;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;

#[derive(Default)]
pub struct Tables {
    pub products: Vec<Product>,
    pub users: Vec<User>,
    pub carts: HashMap<UserId, Vec<CartItem>>,
    pub reviews: Vec<Review>,
}

impl Tables {
    pub fn has_product(&self, id: Uuid) -> bool {
        self.products.iter().any(|p| p.id == id)
    }
}

/// Process-lifetime storage shared by every in-memory repository. One lock
/// guards all tables, so an operation that touches several of them (a
/// cascading delete, a rating refresh) runs as a single step.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                products,
                ..Tables::default()
            })),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
