use domain::{Client, DomainError, EntityRepository, Person};
use infrastructure::{Database, SqliteClientRepository, SqlitePersonRepository};

fn jane() -> Person {
    Person::new(
        "Jane".into(),
        "Doe".into(),
        "jane@x.test".into(),
        "1 Main St".into(),
        "Springfield".into(),
        "IL".into(),
        "62701".into(),
    )
}

fn acme() -> Client {
    Client::new(
        "Acme".into(),
        "acme.test".into(),
        "5551234567".into(),
        "1 Main St".into(),
        "Springfield".into(),
        "IL".into(),
        "62701".into(),
    )
}

fn repositories() -> (SqlitePersonRepository, SqliteClientRepository) {
    let db = Database::new_in_memory().expect("in-memory database");
    let pool = db.get_pool().clone();
    (
        SqlitePersonRepository::new(pool.clone()),
        SqliteClientRepository::new(pool),
    )
}

#[tokio::test]
async fn client_create_then_read_round_trips() {
    let (_, clients) = repositories();

    let id = clients.create_entity(acme()).await.unwrap();
    let read = clients.read_entity(id).await.unwrap();

    assert_eq!(read, acme().with_id(id));
}

#[tokio::test]
async fn person_create_then_read_round_trips() {
    let (persons, _) = repositories();

    let id = persons.create_entity(jane()).await.unwrap();
    let read = persons.read_entity(id).await.unwrap();

    assert_eq!(read, jane().with_id(id));
}

#[tokio::test]
async fn reading_missing_identity_is_not_found() {
    let (persons, clients) = repositories();

    assert!(matches!(
        persons.read_entity(99).await.unwrap_err(),
        DomainError::EntityNotFound { kind: "person", id: 99 }
    ));
    assert!(matches!(
        clients.read_entity(99).await.unwrap_err(),
        DomainError::EntityNotFound { kind: "client", id: 99 }
    ));
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let (persons, _) = repositories();
    let id = persons.create_entity(jane()).await.unwrap();

    let mut changed = jane().with_id(id);
    changed.last_name = "Smith".into();
    changed.city = "Shelbyville".into();
    persons.update_entity(changed.clone()).await.unwrap();

    assert_eq!(persons.read_entity(id).await.unwrap(), changed);
}

#[tokio::test]
async fn updating_missing_identity_is_not_found() {
    let (_, clients) = repositories();

    let err = clients.update_entity(acme().with_id(404)).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::EntityNotFound { kind: "client", id: 404 }
    ));
}

#[tokio::test]
async fn updating_without_identity_is_rejected() {
    let (persons, _) = repositories();

    let err = persons.update_entity(jane()).await.unwrap_err();
    assert!(matches!(err, DomainError::ValidationError(_)));
}

#[tokio::test]
async fn clients_list_in_company_then_website_order() {
    let (_, clients) = repositories();

    let mut zeta = acme();
    zeta.company_name = "Zeta".into();
    zeta.website = "zeta.test".into();
    let mut acme_b = acme();
    acme_b.website = "beta.acme.test".into();

    clients.create_entity(zeta).await.unwrap();
    clients.create_entity(acme()).await.unwrap();
    clients.create_entity(acme_b).await.unwrap();

    let listed: Vec<(String, String)> = clients
        .list_entities()
        .await
        .unwrap()
        .into_iter()
        .map(|c| (c.company_name, c.website))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("Acme".to_string(), "acme.test".to_string()),
            ("Acme".to_string(), "beta.acme.test".to_string()),
            ("Zeta".to_string(), "zeta.test".to_string()),
        ]
    );
}

#[tokio::test]
async fn persons_list_in_first_last_id_order() {
    let (persons, _) = repositories();

    let mut adam = jane();
    adam.first_name = "Adam".into();
    let mut jane_smith = jane();
    jane_smith.last_name = "Smith".into();

    let jane_id = persons.create_entity(jane()).await.unwrap();
    let adam_id = persons.create_entity(adam).await.unwrap();
    let smith_id = persons.create_entity(jane_smith).await.unwrap();

    let listed: Vec<i32> = persons
        .list_entities()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id.unwrap())
        .collect();
    assert_eq!(listed, vec![adam_id, jane_id, smith_id]);
}

#[tokio::test]
async fn association_appears_on_both_sides() {
    let (persons, clients) = repositories();
    let person_id = persons.create_entity(jane()).await.unwrap();
    let client_id = clients.create_entity(acme()).await.unwrap();

    clients.add_association(client_id, person_id).await.unwrap();

    let contacts = clients.get_associations(client_id).await.unwrap();
    assert_eq!(contacts, vec![jane().with_id(person_id)]);
    assert!(clients
        .get_available_associations(client_id)
        .await
        .unwrap()
        .is_empty());

    let their_clients = persons.get_associations(person_id).await.unwrap();
    assert_eq!(their_clients, vec![acme().with_id(client_id)]);
    assert!(persons
        .get_available_associations(person_id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn associations_partition_the_full_set() {
    let (persons, clients) = repositories();
    let client_id = clients.create_entity(acme()).await.unwrap();

    let mut ids = Vec::new();
    for first_name in ["Amy", "Bob", "Cal"] {
        let mut p = jane();
        p.first_name = first_name.into();
        ids.push(persons.create_entity(p).await.unwrap());
    }
    clients.add_association(client_id, ids[1]).await.unwrap();

    let current = clients.get_associations(client_id).await.unwrap();
    let available = clients.get_available_associations(client_id).await.unwrap();

    assert_eq!(current.len(), 1);
    assert_eq!(available.len(), 2);
    let mut all: Vec<i32> = current
        .iter()
        .chain(available.iter())
        .map(|p| p.id.unwrap())
        .collect();
    all.sort();
    let mut expected = ids.clone();
    expected.sort();
    assert_eq!(all, expected);
}

#[tokio::test]
async fn removing_an_association_restores_availability() {
    let (persons, clients) = repositories();
    let person_id = persons.create_entity(jane()).await.unwrap();
    let client_id = clients.create_entity(acme()).await.unwrap();

    clients.add_association(client_id, person_id).await.unwrap();
    clients
        .remove_association(client_id, person_id)
        .await
        .unwrap();

    assert!(clients.get_associations(client_id).await.unwrap().is_empty());
    let available = clients.get_available_associations(client_id).await.unwrap();
    assert_eq!(available.len(), 1);
}

#[tokio::test]
async fn duplicate_association_is_rejected() {
    let (persons, clients) = repositories();
    let person_id = persons.create_entity(jane()).await.unwrap();
    let client_id = clients.create_entity(acme()).await.unwrap();

    clients.add_association(client_id, person_id).await.unwrap();
    let err = clients
        .add_association(client_id, person_id)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::DuplicateAssociation { .. }));
    assert_eq!(clients.get_associations(client_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn removing_an_absent_association_is_a_no_op() {
    let (persons, clients) = repositories();
    let person_id = persons.create_entity(jane()).await.unwrap();
    let client_id = clients.create_entity(acme()).await.unwrap();

    clients
        .remove_association(client_id, person_id)
        .await
        .unwrap();
    clients
        .remove_association(client_id, person_id)
        .await
        .unwrap();

    assert!(clients.get_associations(client_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_an_entity_cascades_its_associations() {
    let (persons, clients) = repositories();
    let person_id = persons.create_entity(jane()).await.unwrap();
    let client_id = clients.create_entity(acme()).await.unwrap();
    clients.add_association(client_id, person_id).await.unwrap();

    persons.delete_entity(person_id).await.unwrap();

    assert!(clients.get_associations(client_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn read_associated_entity_ignores_association_state() {
    let (persons, clients) = repositories();
    let person_id = persons.create_entity(jane()).await.unwrap();

    // Never associated, still readable for the confirmation screen.
    let read = clients.read_associated_entity(person_id).await.unwrap();
    assert_eq!(read, jane().with_id(person_id));

    let err = clients.read_associated_entity(999).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::EntityNotFound { kind: "person", id: 999 }
    ));
}
