#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
