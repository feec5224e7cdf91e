use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::in_memory::cart::InMemoryCartRepository;
use persistence::in_memory::database::InMemoryDatabase;
use persistence::in_memory::product::InMemoryProductRepository;
use persistence::in_memory::review::InMemoryReviewRepository;
use persistence::in_memory::user::InMemoryUserRepository;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::review::repository::ReviewRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::auth::login::LoginUseCaseImpl;
use business::application::auth::register::RegisterUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_items::GetCartItemsUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::review::create::CreateReviewUseCaseImpl;
use business::application::review::get_by_product::GetProductReviewsUseCaseImpl;
use business::application::user::get_all::GetAllUsersUseCaseImpl;
use business::application::user::get_profile::GetUserProfileUseCaseImpl;
use business::domain::auth::services::{PasswordHasher, TokenService};
use business::domain::cart::repository::CartRepository;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use business::domain::review::repository::ReviewRepository;
use business::domain::shared::value_objects::Email;
use business::domain::user::repository::UserRepository;

use crate::api::auth::routes::AuthApi;
use crate::api::cart::routes::CartApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::review::routes::ReviewApi;
use crate::api::user::routes::UserApi;

/// One adapter per repository port, all backed by the same storage.
pub struct Repositories {
    pub products: Arc<dyn ProductRepository>,
    pub cart: Arc<dyn CartRepository>,
    pub users: Arc<dyn UserRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub storage: &'static str,
}

impl Repositories {
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        Self {
            products: Arc::new(ProductRepositoryPostgres::new(pool.clone())),
            cart: Arc::new(CartRepositoryPostgres::new(pool.clone())),
            users: Arc::new(UserRepositoryPostgres::new(pool.clone())),
            reviews: Arc::new(ReviewRepositoryPostgres::new(pool)),
            storage: "postgres",
        }
    }

    /// Data lives only as long as the process.
    pub fn in_memory() -> Self {
        let db = InMemoryDatabase::new();
        Self {
            products: Arc::new(InMemoryProductRepository::new(db.clone())),
            cart: Arc::new(InMemoryCartRepository::new(db.clone())),
            users: Arc::new(InMemoryUserRepository::new(db.clone())),
            reviews: Arc::new(InMemoryReviewRepository::new(db)),
            storage: "in_memory",
        }
    }
}

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub review_api: ReviewApi,
    pub cart_api: CartApi,
    pub auth_api: AuthApi,
    pub user_api: UserApi,
    /// Shared with the bearer-token checker through request data.
    pub token_service: Arc<dyn TokenService>,
}

impl DependencyContainer {
    pub fn new(
        repositories: Repositories,
        hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
        admin_emails: Vec<Email>,
    ) -> Self {
        let product_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("products"));
        let review_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("reviews"));
        let cart_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("cart"));
        let auth_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("auth"));
        let user_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("users"));

        let Repositories {
            products,
            cart,
            users,
            reviews,
            storage,
        } = repositories;

        // Product use cases
        let product_api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: products.clone(),
                logger: product_logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: products.clone(),
                logger: product_logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: products.clone(),
                logger: product_logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: products.clone(),
                logger: product_logger,
            }),
        );

        // Review use cases
        let review_api = ReviewApi::new(
            Arc::new(CreateReviewUseCaseImpl {
                repository: reviews.clone(),
                product_repository: products.clone(),
                logger: review_logger.clone(),
            }),
            Arc::new(GetProductReviewsUseCaseImpl {
                repository: reviews,
                product_repository: products.clone(),
                logger: review_logger,
            }),
        );

        // Cart use cases
        let cart_api = CartApi::new(
            Arc::new(GetCartItemsUseCaseImpl {
                repository: cart.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(AddCartItemUseCaseImpl {
                repository: cart.clone(),
                product_repository: products,
                logger: cart_logger.clone(),
            }),
            Arc::new(UpdateCartItemQuantityUseCaseImpl {
                repository: cart.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(RemoveCartItemUseCaseImpl {
                repository: cart.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(ClearCartUseCaseImpl {
                repository: cart,
                logger: cart_logger,
            }),
        );

        // Auth use cases
        let auth_api = AuthApi::new(
            Arc::new(RegisterUseCaseImpl {
                repository: users.clone(),
                hasher: hasher.clone(),
                admin_emails,
                logger: auth_logger.clone(),
            }),
            Arc::new(LoginUseCaseImpl {
                repository: users.clone(),
                hasher,
                tokens: token_service.clone(),
                logger: auth_logger,
            }),
        );

        // User use cases
        let user_api = UserApi::new(
            Arc::new(GetUserProfileUseCaseImpl {
                repository: users.clone(),
                logger: user_logger.clone(),
            }),
            Arc::new(GetAllUsersUseCaseImpl {
                repository: users,
                logger: user_logger,
            }),
        );

        Self {
            health_api: HealthApi::new(storage),
            product_api,
            review_api,
            cart_api,
            auth_api,
            user_api,
            token_service,
        }
    }
}
