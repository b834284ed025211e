use crate::errors::DomainError;
use async_trait::async_trait;

/// Persistence gateway over an entity kind `E` and its associated kind `T`.
///
/// Implementations translate these operations into storage statements and
/// back, with no business-rule knowledge. Listings are ordered by the kind's
/// natural key (person: first name, last name, id; client: company name,
/// website).
#[async_trait]
pub trait EntityRepository<E, T>: Send + Sync {
    /// Retrieves all entity records in natural-key order.
    async fn list_entities(&self) -> Result<Vec<E>, DomainError>;

    /// Creates a new entity record and returns the generated identity.
    async fn create_entity(&self, entity: E) -> Result<i32, DomainError>;

    /// Retrieves an entity record by identity.
    async fn read_entity(&self, id: i32) -> Result<E, DomainError>;

    /// Full-row replace by identity. Fails with `EntityNotFound` when the
    /// identity matches no row.
    async fn update_entity(&self, entity: E) -> Result<(), DomainError>;

    /// Deletes an entity record by identity. Join rows referencing it are
    /// removed by the storage layer's cascade configuration.
    async fn delete_entity(&self, id: i32) -> Result<(), DomainError>;

    /// All `T` records joined to entity `id`, in `T`'s natural-key order.
    async fn get_associations(&self, id: i32) -> Result<Vec<T>, DomainError>;

    /// All `T` records NOT joined to entity `id`, in `T`'s natural-key
    /// order. Together with `get_associations` this partitions the full
    /// `T` set.
    async fn get_available_associations(&self, id: i32) -> Result<Vec<T>, DomainError>;

    /// Inserts one join row. Fails with `DuplicateAssociation` when the pair
    /// already exists.
    async fn add_association(&self, id: i32, associated_id: i32) -> Result<(), DomainError>;

    /// Deletes the matching join row. Succeeds as a no-op when the pair is
    /// absent.
    async fn remove_association(&self, id: i32, associated_id: i32) -> Result<(), DomainError>;

    /// Reads a `T` record by its own identity, unfiltered by association.
    async fn read_associated_entity(&self, associated_id: i32) -> Result<T, DomainError>;
}
