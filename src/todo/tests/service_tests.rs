//! Service orchestration tests for the todo lifecycle.

use std::sync::Arc;

use crate::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{DoneFlag, TodoDomainError, TodoId},
    services::{CreateTodoRequest, TodoLifecycleError, TodoLifecycleService, UpdateTodoRequest},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TodoLifecycleService<InMemoryTodoRepository<DefaultClock>>;

#[fixture]
fn service() -> TestService {
    TodoLifecycleService::new(Arc::new(InMemoryTodoRepository::new(Arc::new(DefaultClock))))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_input_fields_and_fresh_identifier(service: TestService) {
    let first = service
        .create(CreateTodoRequest::new("buy milk", DoneFlag::Pending))
        .await
        .expect("creation should succeed");
    let second = service
        .create(CreateTodoRequest::new("walk the dog", DoneFlag::Done))
        .await
        .expect("creation should succeed");

    assert_eq!(first.task().as_str(), "buy milk");
    assert_eq!(first.is_done(), DoneFlag::Pending);
    assert_eq!(second.is_done(), DoneFlag::Done);
    assert_ne!(first.id(), second.id());
    assert!(!first.is_deleted());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_empty_task(service: TestService) {
    let result = service
        .create(CreateTodoRequest::new("   ", DoneFlag::Pending))
        .await;

    assert!(matches!(
        result,
        Err(TodoLifecycleError::Domain(TodoDomainError::EmptyTask))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_returns_empty_then_every_created_record(service: TestService) {
    let initial = service.find_all().await.expect("listing should succeed");
    assert!(initial.is_empty());

    for task in ["task1", "task2", "task3"] {
        service
            .create(CreateTodoRequest::new(task, DoneFlag::Pending))
            .await
            .expect("creation should succeed");
    }

    let listed = service.find_all().await.expect("listing should succeed");
    assert_eq!(listed.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_one_or_fail_returns_created_record(service: TestService) {
    let created = service
        .create(CreateTodoRequest::new("buy milk", DoneFlag::Pending))
        .await
        .expect("creation should succeed");

    let fetched = service
        .find_one_or_fail(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_one_or_fail_unknown_id_is_not_found(service: TestService) {
    let id = TodoId::new();
    let result = service.find_one_or_fail(id).await;

    assert!(matches!(
        result,
        Err(TodoLifecycleError::NotFound(missing)) if missing == id
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_only_present_fields(service: TestService) {
    let created = service
        .create(CreateTodoRequest::new("buy milk", DoneFlag::Pending))
        .await
        .expect("creation should succeed");

    let updated = service
        .update(created.id(), UpdateTodoRequest::new().with_done(DoneFlag::Done))
        .await
        .expect("update should succeed");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.task().as_str(), "buy milk");
    assert_eq!(updated.is_done(), DoneFlag::Done);
    assert_eq!(updated.created_at(), created.created_at());
    assert!(updated.updated_at() >= created.updated_at());

    let fetched = service
        .find_one_or_fail(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_only_keeps_completion_flag(service: TestService) {
    let created = service
        .create(CreateTodoRequest::new("buy milk", DoneFlag::Done))
        .await
        .expect("creation should succeed");

    let updated = service
        .update(created.id(), UpdateTodoRequest::new().with_task("buy bread"))
        .await
        .expect("update should succeed");

    assert_eq!(updated.task().as_str(), "buy bread");
    assert_eq!(updated.is_done(), DoneFlag::Done);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_id_is_not_found(service: TestService) {
    let result = service
        .update(TodoId::new(), UpdateTodoRequest::new().with_task("anything"))
        .await;

    assert!(matches!(result, Err(TodoLifecycleError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_empty_task(service: TestService) {
    let created = service
        .create(CreateTodoRequest::new("buy milk", DoneFlag::Pending))
        .await
        .expect("creation should succeed");

    let result = service
        .update(created.id(), UpdateTodoRequest::new().with_task(""))
        .await;

    assert!(matches!(
        result,
        Err(TodoLifecycleError::Domain(TodoDomainError::EmptyTask))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_then_fetch_is_not_found(service: TestService) {
    let created = service
        .create(CreateTodoRequest::new("buy milk", DoneFlag::Pending))
        .await
        .expect("creation should succeed");

    service
        .delete_by_id(created.id())
        .await
        .expect("deletion should succeed");

    let result = service.find_one_or_fail(created.id()).await;
    assert!(matches!(result, Err(TodoLifecycleError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_delete_is_not_found(service: TestService) {
    let created = service
        .create(CreateTodoRequest::new("buy milk", DoneFlag::Pending))
        .await
        .expect("creation should succeed");

    service
        .delete_by_id(created.id())
        .await
        .expect("deletion should succeed");

    let result = service.delete_by_id(created.id()).await;
    assert!(matches!(result, Err(TodoLifecycleError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_records_are_excluded_from_find_all(service: TestService) {
    let kept = service
        .create(CreateTodoRequest::new("task1", DoneFlag::Pending))
        .await
        .expect("creation should succeed");
    let deleted = service
        .create(CreateTodoRequest::new("task2", DoneFlag::Pending))
        .await
        .expect("creation should succeed");

    service
        .delete_by_id(deleted.id())
        .await
        .expect("deletion should succeed");

    let listed = service.find_all().await.expect("listing should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().map(crate::todo::domain::Todo::id), Some(kept.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_roundtrip(service: TestService) {
    let created = service
        .create(CreateTodoRequest::new("buy milk", DoneFlag::Pending))
        .await
        .expect("creation should succeed");
    assert_eq!(created.task().as_str(), "buy milk");
    assert_eq!(created.is_done(), DoneFlag::Pending);

    let updated = service
        .update(
            created.id(),
            UpdateTodoRequest::new()
                .with_task("buy milk")
                .with_done(DoneFlag::Done),
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.task().as_str(), "buy milk");
    assert_eq!(updated.is_done(), DoneFlag::Done);

    service
        .delete_by_id(created.id())
        .await
        .expect("deletion should succeed");

    let result = service.find_one_or_fail(created.id()).await;
    assert!(matches!(result, Err(TodoLifecycleError::NotFound(_))));
}
