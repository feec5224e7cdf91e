use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Id of the product to add
    pub product_id: String,
    /// Quantity to add (default: 1). Merged into an existing line.
    #[oai(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemRequest {
    /// New quantity; 0 removes the line
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Product id of the line
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
    pub line_total_cents: i64,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            line_total_cents: item.line_total_cents(),
            name: item.name,
            price_cents: item.price.cents(),
            quantity: item.quantity,
            image_url: item.image_url,
            added_at: item.added_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    /// Sum of all line quantities
    pub total_quantity: u64,
    pub subtotal_cents: i64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
            items: cart.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClearCartResponse {
    /// Number of lines removed
    pub count: u64,
}
