use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use domain::{Client, DomainError, EntityRepository, Person};

use crate::database::schema::{client, client_person_associations as cpa, person};
use crate::database::SqlitePool;
use crate::repositories::models::{AssociationRow, ClientModel, NewPersonModel, PersonModel};
use crate::repositories::storage_error;

/// SQLite gateway for person records, with clients as the associated kind.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository<Person, Client> for SqlitePersonRepository {
    async fn list_entities(&self) -> Result<Vec<Person>, DomainError> {
        let mut conn = self.pool.get().map_err(storage_error)?;

        let rows = tokio::task::spawn_blocking(move || {
            person::table
                .order((person::first_name, person::last_name, person::person_id))
                .select(PersonModel::as_select())
                .load::<PersonModel>(&mut conn)
        })
        .await
        .map_err(storage_error)?
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_entity(&self, entity: Person) -> Result<i32, DomainError> {
        let mut conn = self.pool.get().map_err(storage_error)?;
        let row = NewPersonModel::from(entity);

        let created = tokio::task::spawn_blocking(move || {
            diesel::insert_into(person::table)
                .values(&row)
                .execute(&mut conn)?;

            // SQLite has no RETURNING here, so fetch the row we just wrote
            person::table
                .order(person::person_id.desc())
                .select(PersonModel::as_select())
                .first::<PersonModel>(&mut conn)
        })
        .await
        .map_err(storage_error)?
        .map_err(storage_error)?;

        Ok(created.person_id)
    }

    async fn read_entity(&self, id: i32) -> Result<Person, DomainError> {
        let mut conn = self.pool.get().map_err(storage_error)?;

        let result = tokio::task::spawn_blocking(move || {
            person::table
                .filter(person::person_id.eq(id))
                .select(PersonModel::as_select())
                .first::<PersonModel>(&mut conn)
                .optional()
        })
        .await
        .map_err(storage_error)?
        .map_err(storage_error)?;

        result
            .map(Into::into)
            .ok_or(DomainError::EntityNotFound { kind: "person", id })
    }

    async fn update_entity(&self, entity: Person) -> Result<(), DomainError> {
        let id = entity.id.ok_or_else(|| {
            DomainError::ValidationError("Person ID is required for updates".to_string())
        })?;

        let mut conn = self.pool.get().map_err(storage_error)?;
        let changes = NewPersonModel::from(entity);

        let affected = tokio::task::spawn_blocking(move || {
            diesel::update(person::table.filter(person::person_id.eq(id)))
                .set(&changes)
                .execute(&mut conn)
        })
        .await
        .map_err(storage_error)?
        .map_err(storage_error)?;

        if affected == 0 {
            return Err(DomainError::EntityNotFound { kind: "person", id });
        }
        Ok(())
    }

    async fn delete_entity(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get().map_err(storage_error)?;

        tokio::task::spawn_blocking(move || {
            diesel::delete(person::table.filter(person::person_id.eq(id))).execute(&mut conn)
        })
        .await
        .map_err(storage_error)?
        .map_err(storage_error)?;

        Ok(())
    }

    async fn get_associations(&self, id: i32) -> Result<Vec<Client>, DomainError> {
        let mut conn = self.pool.get().map_err(storage_error)?;

        let rows = tokio::task::spawn_blocking(move || {
            let joined = cpa::table
                .filter(cpa::person_id.eq(id))
                .select(cpa::client_id);
            client::table
                .filter(client::client_id.eq_any(joined))
                .order((client::company_name, client::website))
                .select(ClientModel::as_select())
                .load::<ClientModel>(&mut conn)
        })
        .await
        .map_err(storage_error)?
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_available_associations(&self, id: i32) -> Result<Vec<Client>, DomainError> {
        let mut conn = self.pool.get().map_err(storage_error)?;

        let rows = tokio::task::spawn_blocking(move || {
            let joined = cpa::table
                .filter(cpa::person_id.eq(id))
                .select(cpa::client_id);
            client::table
                .filter(client::client_id.ne_all(joined))
                .order((client::company_name, client::website))
                .select(ClientModel::as_select())
                .load::<ClientModel>(&mut conn)
        })
        .await
        .map_err(storage_error)?
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn add_association(&self, id: i32, associated_id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get().map_err(storage_error)?;
        let row = AssociationRow {
            client_id: associated_id,
            person_id: id,
        };

        let result = tokio::task::spawn_blocking(move || {
            diesel::insert_into(cpa::table).values(&row).execute(&mut conn)
        })
        .await
        .map_err(storage_error)?;

        match result {
            Ok(_) => Ok(()),
            Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(DomainError::DuplicateAssociation {
                    entity_id: id,
                    associated_id,
                })
            }
            Err(e) => Err(storage_error(e)),
        }
    }

    async fn remove_association(&self, id: i32, associated_id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get().map_err(storage_error)?;

        tokio::task::spawn_blocking(move || {
            diesel::delete(
                cpa::table
                    .filter(cpa::person_id.eq(id))
                    .filter(cpa::client_id.eq(associated_id)),
            )
            .execute(&mut conn)
        })
        .await
        .map_err(storage_error)?
        .map_err(storage_error)?;

        Ok(())
    }

    async fn read_associated_entity(&self, associated_id: i32) -> Result<Client, DomainError> {
        let mut conn = self.pool.get().map_err(storage_error)?;

        let result = tokio::task::spawn_blocking(move || {
            client::table
                .filter(client::client_id.eq(associated_id))
                .select(ClientModel::as_select())
                .first::<ClientModel>(&mut conn)
                .optional()
        })
        .await
        .map_err(storage_error)?
        .map_err(storage_error)?;

        result.map(Into::into).ok_or(DomainError::EntityNotFound {
            kind: "client",
            id: associated_id,
        })
    }
}
