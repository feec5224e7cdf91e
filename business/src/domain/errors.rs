/// Failures reported by repository adapters.
///
/// Variants display as code-style identifiers so the REST layer can forward
/// them untranslated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}
