use std::sync::Arc;

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use rand_core::OsRng;
use tokio::sync::OnceCell;

use business::domain::auth::errors::AuthError;
use business::domain::auth::services::PasswordHasher;

const DUMMY_PASSWORD: &str = "no-such-account";

/// Argon2id with the crate's default parameters. Hashes are stored in PHC
/// string format, so the salt and parameters travel with them. Every hash
/// and verification runs on tokio's blocking pool.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
    dummy_hash: Arc<OnceCell<String>>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Argon2id with explicit cost parameters (memory in KiB).
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            tracing::error!(error = %e, "Invalid argon2 parameters");
            AuthError::HashingFailed
        })?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            dummy_hash: Arc::default(),
        })
    }
}

fn hash_with(argon2: &Argon2<'_>, password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "Argon2 password hashing failed");
            AuthError::HashingFailed
        })
}

fn verify_with(argon2: &Argon2<'_>, password: &str, password_hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(password_hash).map_err(|e| {
        tracing::error!(error = %e, "Stored password hash is not a valid PHC string");
        AuthError::HashingFailed
    })?;

    match argon2.verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => {
            tracing::error!(error = %e, "Argon2 password verification failed");
            Err(AuthError::HashingFailed)
        }
    }
}

async fn run_blocking<T, F>(task: F) -> Result<T, AuthError>
where
    F: FnOnce() -> Result<T, AuthError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task).await.map_err(|e| {
        tracing::error!(error = %e, "Password hashing task did not complete");
        AuthError::HashingFailed
    })?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, AuthError> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        run_blocking(move || hash_with(&argon2, &password)).await
    }

    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();
        run_blocking(move || verify_with(&argon2, &password, &password_hash)).await
    }

    async fn verify_dummy(&self, password: &str) {
        let dummy = self
            .dummy_hash
            .get_or_try_init(|| self.hash(DUMMY_PASSWORD))
            .await;
        if let Ok(dummy) = dummy {
            let _ = self.verify(password, dummy).await;
        }
    }
}
