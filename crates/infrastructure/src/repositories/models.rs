//! Row models and their conversions to and from the domain entities.
//!
//! Kept separate from the domain structs so the storage column layout can
//! change without touching the entities. Both repositories use both models:
//! each kind appears as the associated side of the other.

use diesel::prelude::*;
use domain::{Client, Person};

use crate::database::schema::{client, client_person_associations, person};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = person)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct PersonModel {
    pub person_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = person)]
pub(crate) struct NewPersonModel {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl From<PersonModel> for Person {
    fn from(model: PersonModel) -> Self {
        Person {
            id: Some(model.person_id),
            first_name: model.first_name,
            last_name: model.last_name,
            email_address: model.email_address,
            street_address: model.street_address,
            city: model.city,
            state: model.state,
            zip_code: model.zip_code,
        }
    }
}

impl From<Person> for NewPersonModel {
    fn from(person: Person) -> Self {
        NewPersonModel {
            first_name: person.first_name,
            last_name: person.last_name,
            email_address: person.email_address,
            street_address: person.street_address,
            city: person.city,
            state: person.state,
            zip_code: person.zip_code,
        }
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = client)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ClientModel {
    pub client_id: i32,
    pub company_name: String,
    pub website: String,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = client)]
pub(crate) struct NewClientModel {
    pub company_name: String,
    pub website: String,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl From<ClientModel> for Client {
    fn from(model: ClientModel) -> Self {
        Client {
            id: Some(model.client_id),
            company_name: model.company_name,
            website: model.website,
            phone: model.phone,
            street_address: model.street_address,
            city: model.city,
            state: model.state,
            zip_code: model.zip_code,
        }
    }
}

impl From<Client> for NewClientModel {
    fn from(client: Client) -> Self {
        NewClientModel {
            company_name: client.company_name,
            website: client.website,
            phone: client.phone,
            street_address: client.street_address,
            city: client.city,
            state: client.state,
            zip_code: client.zip_code,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = client_person_associations)]
pub(crate) struct AssociationRow {
    pub client_id: i32,
    pub person_id: i32,
}
