// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, site_dto};
use wapyce::application::use_cases::site_use_case::SITE_IN_USE_MESSAGE;
use wapyce::domain::models::site::SiteStatus;
use wapyce::domain::repositories::site_repository::SiteRepository;
use wapyce::utils::errors::DomainError;

#[tokio::test]
async fn test_register_and_retrieve_site() {
    let app = create_test_app().await;

    let site = app.example_site().await;
    let found = app.sites.get_site(site.id).await.unwrap();

    assert_eq!(found.name, "Site");
    assert_eq!(found.base_url, "http://www.example.com/");
    assert_eq!(found.github_url, "https://github.com/carlsonsantana/wapyce");
    assert_eq!(found.status, SiteStatus::Active);

    let by_url = app
        .site_repo
        .find_by_base_url("http://www.example.com/")
        .await
        .unwrap();
    assert_eq!(by_url.map(|s| s.id), Some(site.id));
}

#[tokio::test]
async fn test_duplicate_base_url_is_integrity_error() {
    let app = create_test_app().await;
    app.example_site().await;

    let err = app
        .sites
        .register_site(site_dto(
            "Other",
            "http://www.example.com/",
            "https://github.com/carlsonsantana/other",
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Integrity(_)), "got {:?}", err);
    assert_eq!(app.sites.list_sites().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_github_url_is_integrity_error() {
    let app = create_test_app().await;
    app.example_site().await;

    let err = app
        .sites
        .register_site(site_dto(
            "Other",
            "http://other.example.com/",
            "https://github.com/carlsonsantana/wapyce",
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Integrity(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_non_github_repository_is_rejected() {
    let app = create_test_app().await;

    let err = app
        .sites
        .register_site(site_dto(
            "W3C",
            "https://www.w3.org/",
            "https://www.w3.org/TR/WCAG20/",
        ))
        .await
        .unwrap_err();

    match err {
        DomainError::Validation(msg) => assert!(msg.contains("github_url"), "{}", msg),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(app.sites.list_sites().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_toggle_and_list_active_sites() {
    let app = create_test_app().await;
    let site = app.example_site().await;
    app.sites
        .register_site(site_dto(
            "Another",
            "http://another.example.com/",
            "https://github.com/example/another",
        ))
        .await
        .unwrap();

    let toggled = app.sites.toggle_site_status(site.id).await.unwrap();
    assert_eq!(toggled.status, SiteStatus::Deactivated);

    let active = app.sites.list_active_sites().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "Another");
    assert_eq!(app.sites.list_sites().await.unwrap().len(), 2);

    let toggled = app.sites.toggle_site_status(site.id).await.unwrap();
    assert_eq!(toggled.status, SiteStatus::Active);
    assert_eq!(app.sites.list_active_sites().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_deactivation_keeps_started_validation() {
    let app = create_test_app().await;
    let site = app.example_site().await;
    let user = app.user("alice").await;

    let validation = app
        .validations
        .start_validation(site.id, user.id)
        .await
        .unwrap();

    app.sites
        .set_site_status(site.id, SiteStatus::Deactivated)
        .await
        .unwrap();

    let still_running = app.validations.get_validation(validation.id).await.unwrap();
    assert!(still_running.is_started());
}

#[tokio::test]
async fn test_referenced_site_cannot_be_deleted() {
    let app = create_test_app().await;
    let site = app.example_site().await;
    let user = app.user("alice").await;
    let validation = app
        .validations
        .start_validation(site.id, user.id)
        .await
        .unwrap();

    let err = app.sites.delete_site(site.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ref m) if m == SITE_IN_USE_MESSAGE));

    app.validations.delete_validation(validation.id).await.unwrap();
    app.sites.delete_site(site.id).await.unwrap();

    let err = app.sites.get_site(site.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "Site" }));
}

#[tokio::test]
async fn test_storage_restricts_site_delete() {
    let app = create_test_app().await;
    let site = app.example_site().await;
    let user = app.user("alice").await;
    app.validations
        .start_validation(site.id, user.id)
        .await
        .unwrap();

    // Bypass the use case check and hit the foreign key directly
    let err = app.site_repo.delete(site.id).await.unwrap_err();
    let err: DomainError = err.into();
    assert!(matches!(err, DomainError::Conflict(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_delete_missing_site_is_not_found() {
    let app = create_test_app().await;

    let err = app.sites.delete_site(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "Site" }));
}
