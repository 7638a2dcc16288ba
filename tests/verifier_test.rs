//! Integration tests for the post-migration verification battery

mod common;

use carelift::adapters::store::StoreClient;
use carelift::core::verification::Verifier;
use chrono::NaiveDate;
use common::{patient, MemoryStore};

#[tokio::test]
async fn test_verification_clean_collection() {
    let store = MemoryStore::new();
    store
        .insert_many(&[patient("Alice Adams", 101), patient("Bob Brown", 102)])
        .await
        .unwrap();

    let verifier = Verifier::new("Alice Adams");
    let report = verifier.run(2, &store).await.unwrap();

    assert_eq!(report.expected_count, 2);
    assert_eq!(report.stored_count, 2);
    assert!(report.count_match);
    assert!(report.duplicate_groups.is_empty());
    assert_eq!(report.invalid_date_count, 0);
    assert!(report.sample_found);
    assert!(report.is_clean());
}

#[tokio::test]
async fn test_verification_count_mismatch() {
    let store = MemoryStore::new();
    store
        .insert_many(&[patient("Alice Adams", 101)])
        .await
        .unwrap();

    let verifier = Verifier::new("Alice Adams");
    let report = verifier.run(100, &store).await.unwrap();

    assert_eq!(report.expected_count, 100);
    assert_eq!(report.stored_count, 1);
    assert!(!report.count_match);
    assert!(!report.is_clean());
}

#[tokio::test]
async fn test_verification_groups_identical_documents() {
    let store = MemoryStore::new();
    // Two identical documents plus one distinct
    store
        .insert_many(&[
            patient("Alice Adams", 101),
            patient("Alice Adams", 101),
            patient("Bob Brown", 102),
        ])
        .await
        .unwrap();

    let verifier = Verifier::new("Bob Brown");
    let report = verifier.run(3, &store).await.unwrap();

    assert_eq!(report.duplicate_groups.len(), 1);
    assert_eq!(report.duplicate_groups[0].count, 2);
    assert_eq!(report.duplicate_groups[0].representative.name, "Alice Adams");
    assert!(!report.is_clean());
}

#[tokio::test]
async fn test_verification_same_name_different_fields_not_grouped() {
    let store = MemoryStore::new();
    // Same name, different room numbers: not duplicates
    store
        .insert_many(&[patient("Alice Adams", 101), patient("Alice Adams", 102)])
        .await
        .unwrap();

    let verifier = Verifier::new("Alice Adams");
    let report = verifier.run(2, &store).await.unwrap();

    assert!(report.duplicate_groups.is_empty());
}

#[tokio::test]
async fn test_verification_counts_invalid_and_unorderable_dates() {
    let store = MemoryStore::new();

    let mut backwards = patient("Alice Adams", 101);
    backwards.date_of_admission = NaiveDate::from_ymd_opt(2024, 5, 10);
    backwards.discharge_date = NaiveDate::from_ymd_opt(2024, 5, 1);

    let mut nulled = patient("Bob Brown", 102);
    nulled.discharge_date = None;

    store
        .insert_many(&[backwards, nulled, patient("Carol Clark", 103)])
        .await
        .unwrap();

    let verifier = Verifier::new("Carol Clark");
    let report = verifier.run(3, &store).await.unwrap();

    assert_eq!(report.invalid_date_count, 1);
    assert_eq!(report.unorderable_date_count, 1);
    assert!(!report.is_clean());
}

#[tokio::test]
async fn test_verification_sample_not_found_is_soft() {
    let store = MemoryStore::new();
    store
        .insert_many(&[patient("Alice Adams", 101)])
        .await
        .unwrap();

    let verifier = Verifier::new("Nobody Here");
    let report = verifier.run(1, &store).await.unwrap();

    assert!(!report.sample_found);
    // Missing sample is informational only
    assert!(report.is_clean());
}
