use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub storage: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub price: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub category: String,
    pub stock: u32,
    pub rating: f64,
    pub review_count: u32,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: u64,
    pub page: u32,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Catalog filters. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub category: String,
    pub stock: u32,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartItem {
    /// Product id of the line
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
    pub line_total_cents: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total_quantity: u64,
    pub subtotal_cents: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ClearCartResponse {
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

/// Error body returned by every failing route.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub name: String,
    pub message: String,
}

impl Cart {
    /// Quantity of `product_id` in the cart, 0 when absent.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.items
            .iter()
            .find(|item| item.id == product_id)
            .map_or(0, |item| item.quantity)
    }
}
