/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    /// The backing storage could not be read.
    #[error("repository.storage_unavailable")]
    StorageUnavailable,
    /// The backing storage rejected a write.
    #[error("repository.persistence")]
    Persistence,
    /// The value could not be encoded for storage.
    #[error("repository.serialization")]
    Serialization,
}
