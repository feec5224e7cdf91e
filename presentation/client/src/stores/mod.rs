mod auth;
mod cart;

pub use auth::AuthStore;
pub use cart::CartStore;
