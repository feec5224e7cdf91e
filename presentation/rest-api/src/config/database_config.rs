use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string. When unset the service keeps
///   its data in memory for the lifetime of the process.
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory of SQL migrations to run at start-up (optional)
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
    pub migrations_path: Option<String>,
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            migrations_path: env::var("MIGRATIONS_PATH").ok().filter(|p| !p.is_empty()),
        }
    }
}

/// Initialize the connection pool, or `None` for the in-memory backend
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<Option<PgPool>> {
    let Some(url) = &settings.url else {
        tracing::warn!("DATABASE_URL not set, using in-memory repositories");
        return Ok(None);
    };

    let config = DatabaseConfig::new(url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;

    if let Some(path) = &settings.migrations_path {
        run_migrations(&pool, path).await?;
        tracing::info!("Migrations from {} applied", path);
    }

    Ok(Some(pool))
}
