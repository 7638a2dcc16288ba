//! Integration tests for the bulk loader

mod common;

use carelift::core::migrate::load;
use carelift::domain::MigrateError;
use common::{patient, MemoryStore};

#[tokio::test]
async fn test_load_inserts_all_documents() {
    let store = MemoryStore::new();
    let documents = vec![patient("Alice Adams", 101), patient("Bob Brown", 102)];

    let inserted = load(&documents, &store).await.unwrap();

    assert_eq!(inserted, 2);
    assert_eq!(store.documents().len(), 2);
    assert_eq!(store.insert_calls(), 1);
}

#[tokio::test]
async fn test_load_empty_set_makes_no_insert_calls() {
    let store = MemoryStore::new();

    let inserted = load(&[], &store).await.unwrap();

    assert_eq!(inserted, 0);
    assert_eq!(store.insert_calls(), 0);
    assert!(store.documents().is_empty());
}

#[tokio::test]
async fn test_load_failure_is_fatal() {
    let store = MemoryStore::failing();
    let documents = vec![patient("Alice Adams", 101)];

    let result = load(&documents, &store).await;

    assert!(matches!(result, Err(MigrateError::Load(_))));
}

#[tokio::test]
async fn test_load_preserves_document_order() {
    let store = MemoryStore::new();
    let documents = vec![
        patient("Carol Clark", 201),
        patient("Alice Adams", 101),
        patient("Bob Brown", 102),
    ];

    load(&documents, &store).await.unwrap();

    let stored = store.documents();
    assert_eq!(stored[0].name, "Carol Clark");
    assert_eq!(stored[1].name, "Alice Adams");
    assert_eq!(stored[2].name, "Bob Brown");
}
