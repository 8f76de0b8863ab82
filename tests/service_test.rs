//! Integration tests for the record service

mod common;

use clientbook::core::ClientService;
use clientbook::domain::{ClientFields, ClientbookError, CustomerId, NewClient};
use common::{client, MemoryStore};

fn fields(name: &str, email: &str, country: &str, age: Option<i32>) -> ClientFields {
    ClientFields {
        name: name.to_string(),
        email: email.to_string(),
        country: country.to_string(),
        age,
    }
}

fn new_client(id: i64, name: &str) -> NewClient {
    NewClient {
        customer_id: CustomerId::new(id),
        fields: fields(name, "someone@example.com", "AR", Some(25)),
    }
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let service = ClientService::new(MemoryStore::new());

    let created = service.create(new_client(10, "Ana")).await.unwrap();
    let fetched = service
        .get_by_id(CustomerId::new(10))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.name, "Ana");
    assert_eq!(fetched.age, Some(25));
}

#[tokio::test]
async fn test_update_changes_fields_only() {
    let service = ClientService::new(MemoryStore::new());
    service.create(new_client(10, "Ana")).await.unwrap();

    let updated = service
        .update(
            CustomerId::new(10),
            fields("Ana María", "someone@example.com", "AR", Some(26)),
        )
        .await
        .unwrap()
        .unwrap();

    let fetched = service
        .get_by_id(CustomerId::new(10))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated, fetched);
    assert_eq!(fetched.customer_id, CustomerId::new(10));
    assert_eq!(fetched.name, "Ana María");
    assert_eq!(fetched.email, "someone@example.com");
    assert_eq!(fetched.age, Some(26));
}

#[tokio::test]
async fn test_create_duplicate_is_rejected() {
    let store = MemoryStore::with_clients(vec![client(3, "Existing")]);
    let service = ClientService::new(store.clone());

    let err = service.create(new_client(3, "Other")).await.unwrap_err();

    assert!(matches!(err, ClientbookError::DuplicateKey(id) if id == CustomerId::new(3)));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_create_reports_every_violation() {
    let service = ClientService::new(MemoryStore::new());
    let invalid = NewClient {
        customer_id: CustomerId::new(1),
        fields: fields(" ", "a@b", "", Some(12)),
    };

    let err = service.create(invalid).await.unwrap_err();

    match err {
        ClientbookError::Validation(violations) => {
            let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
            assert_eq!(fields, vec!["name", "email", "country", "age"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let service = ClientService::new(MemoryStore::new());

    let result = service
        .update(CustomerId::new(99), fields("Ana", "ana@example.com", "AR", None))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let service = ClientService::new(MemoryStore::with_clients(vec![client(1, "Ana")]));

    let err = service
        .update(CustomerId::new(1), fields("Ana", "ana@example.com", "AR", Some(17)))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientbookError::Validation(_)));
}

#[tokio::test]
async fn test_delete() {
    let service = ClientService::new(MemoryStore::with_clients(vec![client(1, "Ana")]));

    assert!(service.delete(CustomerId::new(1)).await.unwrap());
    assert!(!service.delete(CustomerId::new(1)).await.unwrap());
    assert!(service.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_all_ordered_by_id() {
    let service = ClientService::new(MemoryStore::with_clients(vec![
        client(30, "Carla"),
        client(10, "Ana"),
        client(20, "Bea"),
    ]));

    let ids: Vec<i64> = service
        .get_all()
        .await
        .unwrap()
        .iter()
        .map(|c| c.customer_id.value())
        .collect();

    assert_eq!(ids, vec![10, 20, 30]);
}

#[tokio::test]
async fn test_zero_and_negative_ids_accepted() {
    let service = ClientService::new(MemoryStore::new());

    service.create(new_client(0, "Zero")).await.unwrap();
    service.create(new_client(-4, "Negative")).await.unwrap();

    assert_eq!(service.get_all().await.unwrap().len(), 2);
}
