use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{kind} not found with id: {id}")]
    EntityNotFound { kind: &'static str, id: i32 },

    #[error("Association already exists between {entity_id} and {associated_id}")]
    DuplicateAssociation { entity_id: i32, associated_id: i32 },

    #[error("Storage error: {0}")]
    StorageError(String),
}
