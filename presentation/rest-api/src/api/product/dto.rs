use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductPage;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(default)]
    pub description: String,
    /// Price in cents, must not be negative
    pub price_cents: i64,
    /// Main image, absolute http(s) URL
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Additional gallery images
    #[oai(default)]
    pub images: Vec<String>,
    /// Category name (cannot be empty)
    pub category: String,
    #[oai(default)]
    pub stock: u32,
    #[oai(default)]
    pub features: Vec<String>,
    /// Whether the product is listed (default: true)
    #[oai(skip_serializing_if_is_none)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in cents
    pub price_cents: i64,
    /// Price formatted with two decimals
    pub price: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub category: String,
    pub stock: u32,
    /// Average review rating between 0 and 5
    pub rating: f64,
    pub review_count: u32,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price_cents: product.price.cents(),
            price: product.price.to_string(),
            image_url: product.image_url,
            images: product.images,
            category: product.category,
            stock: product.stock,
            rating: product.rating,
            review_count: product.review_count,
            features: product.features,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    pub items: Vec<ProductResponse>,
    /// Products matching the filters across all pages
    pub total: u64,
    pub page: u32,
    /// Page size, absent when no limit was requested
    #[oai(skip_serializing_if_is_none)]
    pub limit: Option<u32>,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}
