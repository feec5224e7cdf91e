pub mod db;
pub mod in_memory {
    pub mod cart;
    pub mod database;
    pub mod product;
    pub mod review;
    pub mod user;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod review {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
