//! SQLite backend integration tests.
//!
//! These tests verify the SQLite backend implementation against the public API.

use serde_json::json;

use courses_persistence::backends::sqlite::{SqliteBackend, SqliteBackendConfig};
use courses_persistence::core::{Backend, CourseStorage, StudentStorage};
use courses_persistence::error::{ResourceError, StorageError, ValidationError};
use courses_persistence::types::{CourseChanges, CourseFilter, NewCourse, NewStudent};

fn create_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

async fn seed(backend: &SqliteBackend, names: &[&str]) -> Vec<i64> {
    let mut ids = Vec::new();
    for name in names {
        let course = backend
            .create_course(NewCourse::new(*name).unwrap())
            .await
            .unwrap();
        ids.push(course.id);
    }
    ids
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_course() {
    let backend = create_backend();

    let created = backend
        .create_course(NewCourse::new("Вы устроитесь на работу").unwrap())
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Вы устроитесь на работу");
}

#[tokio::test]
async fn test_create_assigns_increasing_ids() {
    let backend = create_backend();

    let ids = seed(&backend, &["a", "b", "c"]).await;

    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_create_from_json_ignores_id() {
    let backend = create_backend();

    let input = NewCourse::from_json(&json!({"id": 999, "name": "Chemistry"})).unwrap();
    let created = backend.create_course(input).await.unwrap();

    assert_ne!(created.id, 999);
}

// ============================================================================
// Read Tests
// ============================================================================

#[tokio::test]
async fn test_read_course() {
    let backend = create_backend();
    let ids = seed(&backend, &["Physics"]).await;

    let read = backend.read_course(ids[0]).await.unwrap().unwrap();

    assert_eq!(read.id, ids[0]);
    assert_eq!(read.name, "Physics");
}

#[tokio::test]
async fn test_read_nonexistent() {
    let backend = create_backend();

    let result = backend.read_course(12345).await.unwrap();

    assert!(result.is_none());
    assert!(!backend.course_exists(12345).await.unwrap());
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_returns_creation_order() {
    let backend = create_backend();
    let names: Vec<String> = (0..100).map(|i| format!("Course {}", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let ids = seed(&backend, &refs).await;

    let listed = backend.list_courses(&CourseFilter::new()).await.unwrap();

    assert_eq!(listed.len(), 100);
    let listed_ids: Vec<i64> = listed.iter().map(|c| c.id).collect();
    assert_eq!(listed_ids, ids);
}

#[tokio::test]
async fn test_list_filter_by_id() {
    let backend = create_backend();
    let ids = seed(&backend, &["one", "two", "three"]).await;

    let listed = backend
        .list_courses(&CourseFilter::new().with_id(ids[1]))
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "two");
}

#[tokio::test]
async fn test_list_filter_by_name_is_exact() {
    let backend = create_backend();
    seed(&backend, &["Math", "Mathematics", "math"]).await;

    let listed = backend
        .list_courses(&CourseFilter::new().with_name("Math"))
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Math");
}

#[tokio::test]
async fn test_list_filters_are_conjunctive() {
    let backend = create_backend();
    let ids = seed(&backend, &["Biology", "Biology"]).await;

    let both = backend
        .list_courses(&CourseFilter::new().with_id(ids[0]).with_name("Biology"))
        .await
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].id, ids[0]);

    let none = backend
        .list_courses(&CourseFilter::new().with_id(ids[0]).with_name("History"))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_list_empty_store() {
    let backend = create_backend();

    let listed = backend.list_courses(&CourseFilter::new()).await.unwrap();

    assert!(listed.is_empty());
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_course_name() {
    let backend = create_backend();
    let ids = seed(&backend, &["Old"]).await;

    let changes = CourseChanges::new().with_name("New").unwrap();
    let updated = backend.update_course(ids[0], changes).await.unwrap();

    assert_eq!(updated.id, ids[0]);
    assert_eq!(updated.name, "New");
    let read = backend.read_course(ids[0]).await.unwrap().unwrap();
    assert_eq!(read.name, "New");
}

#[tokio::test]
async fn test_update_nonexistent() {
    let backend = create_backend();

    let changes = CourseChanges::new().with_name("New").unwrap();
    let result = backend.update_course(404, changes).await;

    assert!(matches!(
        result,
        Err(StorageError::Resource(ResourceError::NotFound { .. }))
    ));
}

#[tokio::test]
async fn test_invalid_change_is_rejected_before_storage() {
    let result = CourseChanges::new().with_name("   ");

    assert!(matches!(result, Err(ValidationError::InvalidFields { .. })));
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_course() {
    let backend = create_backend();
    let ids = seed(&backend, &["Temporary", "Kept"]).await;

    backend.delete_course(ids[0]).await.unwrap();

    assert!(backend.read_course(ids[0]).await.unwrap().is_none());
    assert!(backend.read_course(ids[1]).await.unwrap().is_some());
    assert_eq!(backend.count_courses().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let backend = create_backend();
    let ids = seed(&backend, &["Once"]).await;

    backend.delete_course(ids[0]).await.unwrap();
    let result = backend.delete_course(ids[0]).await;

    assert!(matches!(
        result,
        Err(StorageError::Resource(ResourceError::NotFound { .. }))
    ));
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let backend = create_backend();
    let ids = seed(&backend, &["a", "b"]).await;
    backend.delete_course(ids[1]).await.unwrap();

    let again = seed(&backend, &["c"]).await;

    assert!(again[0] > ids[1]);
}

// ============================================================================
// Student Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_students() {
    let backend = create_backend();

    let first = backend
        .create_student(NewStudent::from_json(&json!({"name": "Anna"})).unwrap())
        .await
        .unwrap();
    let second = backend
        .create_student(
            NewStudent::from_json(&json!({"name": "Boris", "birth_date": "1999-12-31"}))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(first.birth_date.is_none());
    let listed = backend.list_students().await.unwrap();
    assert_eq!(listed, vec![first, second.clone()]);
    assert_eq!(
        backend.read_student(second.id).await.unwrap(),
        Some(second)
    );
}

// ============================================================================
// File Database Tests
// ============================================================================

#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("courses.db");

    let id = {
        let backend = SqliteBackend::open(&path).unwrap();
        backend.init_schema().unwrap();
        assert!(!backend.is_memory());
        seed(&backend, &["Durable"]).await[0]
    };

    let reopened = SqliteBackend::open(&path).unwrap();
    reopened.init_schema().unwrap();
    let read = reopened.read_course(id).await.unwrap().unwrap();
    assert_eq!(read.name, "Durable");
}

#[tokio::test]
async fn test_file_database_with_pool() {
    let dir = tempfile::tempdir().unwrap();
    let config = SqliteBackendConfig {
        max_connections: 4,
        ..Default::default()
    };
    let backend = SqliteBackend::with_config(dir.path().join("pool.db"), config).unwrap();
    backend.initialize().await.unwrap();

    seed(&backend, &["a", "b", "c"]).await;

    assert_eq!(backend.count_courses().await.unwrap(), 3);
    assert!(backend.health_check().await.is_ok());
}
