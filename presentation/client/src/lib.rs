//! Typed client for the storefront REST API, plus stores that keep a local
//! copy of the signed-in user and their cart.

mod api_client;
mod error;
pub mod models;
pub mod stores;

pub use api_client::ApiClient;
pub use error::ClientError;
