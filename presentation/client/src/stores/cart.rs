use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api_client::ApiClient;
use crate::error::ClientError;
use crate::models::Cart;

/// Local copy of the signed-in user's cart.
///
/// Every mutation goes to the server first; the local copy is replaced with
/// the cart the server returns and left untouched when the call fails.
pub struct CartStore {
    client: Arc<ApiClient>,
    cart: RwLock<Cart>,
}

impl CartStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            cart: RwLock::new(Cart::default()),
        }
    }

    pub async fn snapshot(&self) -> Cart {
        self.cart.read().await.clone()
    }

    pub async fn item_count(&self) -> u64 {
        self.cart.read().await.total_quantity
    }

    pub async fn subtotal_cents(&self) -> i64 {
        self.cart.read().await.subtotal_cents
    }

    pub async fn quantity_of(&self, product_id: &str) -> u32 {
        self.cart.read().await.quantity_of(product_id)
    }

    /// Reloads from the server. An unreachable server or missing session
    /// leaves an empty cart.
    pub async fn refresh(&self) -> Cart {
        let cart = self.client.cart_or_empty().await;
        *self.cart.write().await = cart.clone();
        cart
    }

    pub async fn add(&self, product_id: &str, quantity: u32) -> Result<Cart, ClientError> {
        self.mirror(self.client.add_to_cart(product_id, quantity).await)
            .await
    }

    /// Quantity 0 removes the line.
    pub async fn update(&self, product_id: &str, quantity: u32) -> Result<Cart, ClientError> {
        self.mirror(self.client.update_cart_item(product_id, quantity).await)
            .await
    }

    pub async fn remove(&self, product_id: &str) -> Result<Cart, ClientError> {
        self.mirror(self.client.remove_cart_item(product_id).await)
            .await
    }

    pub async fn clear(&self) -> Result<(), ClientError> {
        let count = self.client.clear_cart().await?;
        tracing::debug!(count, "Cart cleared");
        *self.cart.write().await = Cart::default();
        Ok(())
    }

    /// Drops the local copy without calling the server, e.g. after logout.
    pub async fn reset(&self) {
        *self.cart.write().await = Cart::default();
    }

    async fn mirror(&self, outcome: Result<Cart, ClientError>) -> Result<Cart, ClientError> {
        match outcome {
            Ok(cart) => {
                *self.cart.write().await = cart.clone();
                Ok(cart)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cart update failed, keeping local cart");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CartItem;
    use chrono::Utc;
    use std::time::Duration;

    fn store() -> CartStore {
        let client =
            ApiClient::with_timeout("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        CartStore::new(Arc::new(client))
    }

    fn cart(lines: &[(&str, u32, i64)]) -> Cart {
        let items: Vec<CartItem> = lines
            .iter()
            .map(|(id, quantity, price)| CartItem {
                id: id.to_string(),
                name: format!("Product {id}"),
                price_cents: *price,
                quantity: *quantity,
                line_total_cents: price * i64::from(*quantity),
                image_url: None,
                added_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .collect();
        Cart {
            total_quantity: items.iter().map(|i| u64::from(i.quantity)).sum(),
            subtotal_cents: items.iter().map(|i| i.line_total_cents).sum(),
            items,
        }
    }

    #[tokio::test]
    async fn should_mirror_cart_returned_by_server() {
        let store = store();

        store.mirror(Ok(cart(&[("a", 2, 500), ("b", 1, 250)]))).await.unwrap();

        assert_eq!(store.item_count().await, 3);
        assert_eq!(store.subtotal_cents().await, 1_250);
        assert_eq!(store.quantity_of("a").await, 2);
        assert_eq!(store.quantity_of("missing").await, 0);
    }

    #[tokio::test]
    async fn should_keep_local_cart_when_update_fails() {
        let store = store();
        store.mirror(Ok(cart(&[("a", 2, 500)]))).await.unwrap();

        let result = store.add("b", 1).await;

        assert!(result.is_err());
        assert_eq!(store.item_count().await, 2);
        assert_eq!(store.quantity_of("b").await, 0);
    }

    #[tokio::test]
    async fn should_empty_cart_when_refresh_cannot_reach_server() {
        let store = store();
        store.mirror(Ok(cart(&[("a", 1, 100)]))).await.unwrap();

        let refreshed = store.refresh().await;

        assert!(refreshed.items.is_empty());
        assert_eq!(store.item_count().await, 0);
    }

    #[tokio::test]
    async fn should_reset_without_server() {
        let store = store();
        store.mirror(Ok(cart(&[("a", 1, 100)]))).await.unwrap();

        store.reset().await;

        assert_eq!(store.snapshot().await, Cart::default());
    }
}
