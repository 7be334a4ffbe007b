// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, TestApp};
use wapyce::application::dto::page_request::RecordPageDto;
use wapyce::application::use_cases::validation_use_case::{
    PAGE_DELETE_ON_CLOSED_VALIDATION_MESSAGE, PAGE_NOT_OWNED_MESSAGE,
    PAGE_ON_CLOSED_VALIDATION_MESSAGE,
};
use wapyce::domain::models::validation::Validation;
use wapyce::domain::repositories::page_repository::PageRepository;
use wapyce::utils::errors::DomainError;

async fn started_validation(app: &TestApp, username: &str) -> Validation {
    let site = match app.sites.list_sites().await.unwrap().into_iter().next() {
        Some(site) => site,
        None => app.example_site().await,
    };
    let user = app.user(username).await;
    app.validations
        .start_validation(site.id, user.id)
        .await
        .unwrap()
}

fn page(validation: &Validation, url: &str) -> RecordPageDto {
    RecordPageDto {
        validation_id: validation.id,
        page_url: url.to_string(),
    }
}

#[tokio::test]
async fn test_page_outside_site_is_rejected() {
    let app = create_test_app().await;
    let validation = started_validation(&app, "alice").await;

    let err = app
        .validations
        .record_page(page(&validation, "https://www.w3.org/"))
        .await
        .unwrap_err();

    match err {
        DomainError::Validation(msg) => {
            assert_eq!(msg, "The page URL must start with \"http://www.example.com/\".")
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(app.page_repo.count_by_validation(validation.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_page_in_same_validation() {
    let app = create_test_app().await;
    let validation = started_validation(&app, "alice").await;

    app.validations
        .record_page(page(&validation, "http://www.example.com/contact"))
        .await
        .unwrap();
    let err = app
        .validations
        .record_page(page(&validation, "http://www.example.com/contact"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Integrity(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_same_page_in_different_validations() {
    let app = create_test_app().await;
    let first = started_validation(&app, "alice").await;
    let second = started_validation(&app, "bob").await;

    app.validations
        .record_page(page(&first, "http://www.example.com/contact"))
        .await
        .unwrap();
    app.validations
        .record_page(page(&second, "http://www.example.com/contact"))
        .await
        .unwrap();

    assert_eq!(app.validations.list_pages(first.id).await.unwrap().len(), 1);
    assert_eq!(app.validations.list_pages(second.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_page_on_canceled_validation_is_refused() {
    let app = create_test_app().await;
    let validation = started_validation(&app, "alice").await;
    app.validations.cancel_validation(validation.id).await.unwrap();

    let err = app
        .validations
        .record_page(page(&validation, "http://www.example.com/"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidStateTransition(ref m) if m == PAGE_ON_CLOSED_VALIDATION_MESSAGE));
}

#[tokio::test]
async fn test_page_on_unknown_validation_is_not_found() {
    let app = create_test_app().await;
    let validation = Validation::new(uuid::Uuid::new_v4(), uuid::Uuid::new_v4());

    let err = app
        .validations
        .record_page(page(&validation, "http://www.example.com/"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { entity: "Validation" }));
}

#[tokio::test]
async fn test_only_owner_deletes_page() {
    let app = create_test_app().await;
    let validation = started_validation(&app, "alice").await;
    let mallory = app.user("mallory").await;
    let recorded = app
        .validations
        .record_page(page(&validation, "http://www.example.com/"))
        .await
        .unwrap();

    let err = app
        .validations
        .delete_page(recorded.id, mallory.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(ref m) if m == PAGE_NOT_OWNED_MESSAGE));
    assert!(app.page_repo.find_by_id(recorded.id).await.unwrap().is_some());

    app.validations
        .delete_page(recorded.id, validation.user_id)
        .await
        .unwrap();
    assert!(app.page_repo.find_by_id(recorded.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_pages_of_finished_validation_are_kept() {
    let app = create_test_app().await;
    let validation = started_validation(&app, "alice").await;
    let recorded = app
        .validations
        .record_page(page(&validation, "http://www.example.com/"))
        .await
        .unwrap();
    app.validations.finish_validation(validation.id).await.unwrap();

    let err = app
        .validations
        .delete_page(recorded.id, validation.user_id)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidStateTransition(ref m) if m == PAGE_DELETE_ON_CLOSED_VALIDATION_MESSAGE));
    assert_eq!(app.validations.list_pages(validation.id).await.unwrap().len(), 1);
    assert!(app
        .validations
        .get_validation(validation.id)
        .await
        .unwrap()
        .is_finished());
}

#[tokio::test]
async fn test_storage_restricts_validation_delete() {
    let app = create_test_app().await;
    let validation = started_validation(&app, "alice").await;
    app.validations
        .record_page(page(&validation, "http://www.example.com/"))
        .await
        .unwrap();

    use wapyce::domain::repositories::validation_repository::ValidationRepository;
    let err: DomainError = app
        .validation_repo
        .delete(validation.id)
        .await
        .unwrap_err()
        .into();
    assert!(matches!(err, DomainError::Conflict(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_cleanup_in_dependency_order() {
    let app = create_test_app().await;
    let validation = started_validation(&app, "alice").await;
    let recorded = app
        .validations
        .record_page(page(&validation, "http://www.example.com/"))
        .await
        .unwrap();

    app.validations
        .delete_page(recorded.id, validation.user_id)
        .await
        .unwrap();
    app.validations.delete_validation(validation.id).await.unwrap();
    app.sites.delete_site(validation.site_id).await.unwrap();
    app.users.delete_user(validation.user_id).await.unwrap();

    assert!(app.sites.list_sites().await.unwrap().is_empty());
}
