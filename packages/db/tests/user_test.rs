//! User repository integration tests

use assert_matches::assert_matches;

use staylodge_db::{DbError, UserRepository};
use staylodge_test_utils::{require_db, unique_email};

#[tokio::test]
async fn test_create_then_find_by_id() {
    require_db!(pool);
    let repo = UserRepository::new(pool);
    let email = unique_email();

    let created = repo.create("Ada Host", &email, "$2b$10$hash").await.unwrap();
    assert_eq!(created.name, "Ada Host");
    assert_eq!(created.email, email);

    let fetched = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.email, email);
}

#[tokio::test]
async fn test_email_lookup_is_case_insensitive() {
    require_db!(pool);
    let repo = UserRepository::new(pool);
    let email = unique_email();

    let created = repo.create("Case Guest", &email, "$2b$10$hash").await.unwrap();

    let fetched = repo.find_by_email(&email.to_uppercase()).await.unwrap();
    assert_eq!(fetched.id, created.id);
    // Stored lower-cased regardless of submitted casing.
    assert_eq!(fetched.email, email);
}

#[tokio::test]
async fn test_duplicate_email_is_constraint_violation() {
    require_db!(pool);
    let repo = UserRepository::new(pool);
    let email = unique_email();

    repo.create("First", &email, "$2b$10$hash").await.unwrap();
    let err = repo
        .create("Second", &email.to_uppercase(), "$2b$10$hash")
        .await
        .unwrap_err();
    assert_matches!(err, DbError::ConstraintViolation(_));
}

#[tokio::test]
async fn test_unknown_email_is_not_found() {
    require_db!(pool);
    let repo = UserRepository::new(pool);
    let err = repo.find_by_email(&unique_email()).await.unwrap_err();
    assert_matches!(err, DbError::NotFound { resource_type: "user", .. });
}
