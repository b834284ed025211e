pub mod entity_service;

pub use entity_service::{ClientService, EntityService, PersonService};
