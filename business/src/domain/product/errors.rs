#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.invalid_stock")]
    InvalidStock,
    #[error("product.invalid_image_url")]
    InvalidImageUrl,
    #[error("product.invalid_price_range")]
    InvalidPriceRange,
    #[error("product.invalid_pagination")]
    InvalidPagination,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
