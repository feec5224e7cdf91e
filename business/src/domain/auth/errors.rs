#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_email")]
    InvalidEmail,
    #[error("auth.weak_password")]
    WeakPassword,
    #[error("auth.name_empty")]
    NameEmpty,
    #[error("auth.email_taken")]
    EmailTaken,
    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.invalid_token")]
    InvalidToken,
    #[error("auth.token_expired")]
    TokenExpired,
    #[error("auth.hashing_failed")]
    HashingFailed,
    #[error("auth.token_signing_failed")]
    TokenSigningFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
