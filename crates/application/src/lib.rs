use std::sync::Arc;

use domain::{Client, ClientService, DomainError, EntityRepository, EntityService, Person, PersonService};
use infrastructure::{Database, SqliteClientRepository, SqlitePersonRepository, SqlitePool};

/// Directory application - wires the SQLite gateways into the two entity
/// services. Concrete repositories are selected here by explicit
/// construction; nothing is looked up by name.
pub struct DirectoryApp {
    pub person_service: PersonService,
    pub client_service: ClientService,
}

impl DirectoryApp {
    /// Opens the database at `database_path` and wires the full stack.
    pub fn new(database_path: &str) -> Result<Self, DomainError> {
        let database = Database::new(database_path)?;
        Ok(Self::from_pool(database.get_pool().clone()))
    }

    /// Wiring for tests against an already-bootstrapped pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        let person_repository: Arc<dyn EntityRepository<Person, Client>> =
            Arc::new(SqlitePersonRepository::new(pool.clone()));
        let client_repository: Arc<dyn EntityRepository<Client, Person>> =
            Arc::new(SqliteClientRepository::new(pool));

        Self {
            person_service: EntityService::new(person_repository),
            client_service: EntityService::new(client_repository),
        }
    }
}
