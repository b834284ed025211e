use domain::DomainError;

pub(crate) mod models;
pub mod sqlite_client_repository;
pub mod sqlite_person_repository;

pub use sqlite_client_repository::SqliteClientRepository;
pub use sqlite_person_repository::SqlitePersonRepository;

pub(crate) fn storage_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::StorageError(e.to_string())
}
