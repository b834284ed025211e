pub mod entity_repository;

pub use entity_repository::EntityRepository;
