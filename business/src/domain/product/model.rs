use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::{MAX_STOCK, Price};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub category: String,
    pub stock: u32,
    /// Average review rating, 0 when the product has no reviews.
    pub rating: f64,
    pub review_count: u32,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub category: String,
    pub stock: u32,
    pub features: Vec<String>,
    pub is_active: bool,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.category.trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }

        let price = Price::from_cents(props.price_cents)?;

        if props.stock > MAX_STOCK {
            return Err(ProductError::InvalidStock);
        }

        if let Some(url) = &props.image_url {
            validate_image_url(url)?;
        }
        for url in &props.images {
            validate_image_url(url)?;
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name.trim().to_string(),
            description: props.description,
            price,
            image_url: props.image_url,
            images: props.images,
            category: props.category.trim().to_string(),
            stock: props.stock,
            rating: 0.0,
            review_count: 0,
            features: props.features,
            is_active: props.is_active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Recomputes `rating` and `review_count` from every rating the product
    /// has received. Ratings are already bounded to 1..=5, so the average is too.
    pub fn apply_review_ratings(&mut self, ratings: &[u8]) {
        self.review_count = u32::try_from(ratings.len()).unwrap_or(u32::MAX);
        self.rating = if ratings.is_empty() {
            0.0
        } else {
            let sum: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
            let average = f64::from(sum) / ratings.len() as f64;
            (average * 100.0).round() / 100.0
        };
        self.updated_at = Utc::now();
    }
}

fn validate_image_url(raw: &str) -> Result<(), ProductError> {
    match Url::parse(raw) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
        _ => Err(ProductError::InvalidImageUrl),
    }
}
