use std::sync::Arc;

use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use security::Argon2PasswordHasher;
use setup::{
    dependency_injection::{DependencyContainer, Repositories},
    server::Server,
};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, database, auth)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize storage
    let repositories = match database_config::init_database(&config.database).await? {
        Some(pool) => Repositories::postgres(pool),
        None => Repositories::in_memory(),
    };
    tracing::info!("Using {} storage", repositories.storage);

    // 5. Wire dependencies
    let container = DependencyContainer::new(
        repositories,
        Arc::new(Argon2PasswordHasher::new()),
        Arc::new(config.auth.token_service()),
        config.auth.admin_emails.clone(),
    );

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
