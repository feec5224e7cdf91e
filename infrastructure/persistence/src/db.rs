use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

use business::domain::errors::RepositoryError;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!("Could not connect to PostgreSQL: {}", e);
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        tracing::error!("Migrations directory {} does not exist", migrations_path);
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!("Migration failed: {}", e);
            DatabaseError::MigrationError
        })
}

/// Maps a driver error to the domain. Unique constraint violations become
/// `Duplicated` and foreign key violations `NotFound`; everything else is
/// logged and reported as `DatabaseError`.
pub(crate) fn map_database_error(error: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db) = &error
        && db.is_unique_violation()
    {
        return RepositoryError::Duplicated;
    }
    if let sqlx::Error::Database(db) = &error
        && db.is_foreign_key_violation()
    {
        return RepositoryError::NotFound;
    }
    tracing::error!("Database query failed: {}", error);
    RepositoryError::DatabaseError
}

pub(crate) fn cents_to_decimal(cents: i64) -> BigDecimal {
    BigDecimal::new(cents.into(), 2)
}

/// Converts a count to an `INTEGER` column value. Never clamps.
pub(crate) fn to_db_int(value: u32) -> Result<i32, RepositoryError> {
    i32::try_from(value).map_err(|_| {
        tracing::error!("Value {} does not fit an INTEGER column", value);
        RepositoryError::DatabaseError
    })
}

pub(crate) fn decimal_to_cents(amount: &BigDecimal) -> Result<i64, RepositoryError> {
    (amount.clone() * BigDecimal::from(100))
        .round(0)
        .to_i64()
        .ok_or(RepositoryError::DatabaseError)
}
