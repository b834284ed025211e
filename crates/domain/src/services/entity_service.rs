use std::sync::Arc;

use crate::entities::{Client, Entity, Person};
use crate::errors::DomainError;
use crate::repositories::EntityRepository;

/// Validation-plus-delegation layer between controllers and the persistence
/// gateway.
///
/// `create_entity` and `update_entity` perform no re-validation: the caller
/// is responsible for invoking `validate_entity` first and only mutating
/// when the error list comes back empty.
pub struct EntityService<E, T> {
    repository: Arc<dyn EntityRepository<E, T>>,
}

/// Person operations, with clients as the associated kind.
pub type PersonService = EntityService<Person, Client>;

/// Client operations, with persons as the associated kind.
pub type ClientService = EntityService<Client, Person>;

impl<E: Entity, T> EntityService<E, T> {
    pub fn new(repository: Arc<dyn EntityRepository<E, T>>) -> Self {
        Self { repository }
    }

    /// Evaluates every field constraint and returns all violations sorted
    /// lexicographically. An empty list means the entity is valid.
    pub fn validate_entity(&self, entity: &E) -> Vec<String> {
        let mut errors = entity.validate();
        errors.sort();
        errors
    }

    pub async fn list_entities(&self) -> Result<Vec<E>, DomainError> {
        self.repository.list_entities().await
    }

    pub async fn create_entity(&self, entity: E) -> Result<i32, DomainError> {
        self.repository.create_entity(entity).await
    }

    pub async fn read_entity(&self, id: i32) -> Result<E, DomainError> {
        self.repository.read_entity(id).await
    }

    pub async fn update_entity(&self, entity: E) -> Result<(), DomainError> {
        self.repository.update_entity(entity).await
    }

    pub async fn delete_entity(&self, id: i32) -> Result<(), DomainError> {
        self.repository.delete_entity(id).await
    }

    pub async fn get_associations(&self, id: i32) -> Result<Vec<T>, DomainError> {
        self.repository.get_associations(id).await
    }

    pub async fn get_available_associations(&self, id: i32) -> Result<Vec<T>, DomainError> {
        self.repository.get_available_associations(id).await
    }

    pub async fn add_association(&self, id: i32, associated_id: i32) -> Result<(), DomainError> {
        self.repository.add_association(id, associated_id).await
    }

    pub async fn remove_association(
        &self,
        id: i32,
        associated_id: i32,
    ) -> Result<(), DomainError> {
        self.repository.remove_association(id, associated_id).await
    }

    pub async fn read_associated_entity(&self, associated_id: i32) -> Result<T, DomainError> {
        self.repository.read_associated_entity(associated_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Stub gateway that records nothing and fails every lookup.
    struct EmptyRepository;

    #[async_trait]
    impl EntityRepository<Person, Client> for EmptyRepository {
        async fn list_entities(&self) -> Result<Vec<Person>, DomainError> {
            Ok(Vec::new())
        }

        async fn create_entity(&self, _entity: Person) -> Result<i32, DomainError> {
            Ok(1)
        }

        async fn read_entity(&self, id: i32) -> Result<Person, DomainError> {
            Err(DomainError::EntityNotFound { kind: "person", id })
        }

        async fn update_entity(&self, entity: Person) -> Result<(), DomainError> {
            let id = entity
                .id
                .ok_or_else(|| DomainError::ValidationError("missing id".into()))?;
            Err(DomainError::EntityNotFound { kind: "person", id })
        }

        async fn delete_entity(&self, _id: i32) -> Result<(), DomainError> {
            Ok(())
        }

        async fn get_associations(&self, _id: i32) -> Result<Vec<Client>, DomainError> {
            Ok(Vec::new())
        }

        async fn get_available_associations(&self, _id: i32) -> Result<Vec<Client>, DomainError> {
            Ok(Vec::new())
        }

        async fn add_association(&self, _id: i32, _associated_id: i32) -> Result<(), DomainError> {
            Ok(())
        }

        async fn remove_association(
            &self,
            _id: i32,
            _associated_id: i32,
        ) -> Result<(), DomainError> {
            Ok(())
        }

        async fn read_associated_entity(&self, associated_id: i32) -> Result<Client, DomainError> {
            Err(DomainError::EntityNotFound {
                kind: "client",
                id: associated_id,
            })
        }
    }

    fn service() -> PersonService {
        EntityService::new(Arc::new(EmptyRepository))
    }

    #[test]
    fn validation_errors_come_back_sorted() {
        let person = Person::new(
            "Jane".into(),
            String::new(),
            String::new(),
            "1 Main St".into(),
            "Springfield".into(),
            "IL".into(),
            "62701".into(),
        );
        let errors = service().validate_entity(&person);
        assert_eq!(
            errors,
            vec![
                "Email address is required with maximum length of 50".to_string(),
                "Last name is required with maximum length of 50".to_string(),
            ]
        );
        let mut sorted = errors.clone();
        sorted.sort();
        assert_eq!(errors, sorted);
    }

    #[test]
    fn valid_entity_produces_no_errors() {
        let person = Person::new(
            "Jane".into(),
            "Doe".into(),
            "jane@x.test".into(),
            "1 Main St".into(),
            "Springfield".into(),
            "IL".into(),
            "62701".into(),
        );
        assert!(service().validate_entity(&person).is_empty());
    }

    #[tokio::test]
    async fn reads_pass_through_repository_errors() {
        let err = service().read_entity(42).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::EntityNotFound { kind: "person", id: 42 }
        ));
    }
}
