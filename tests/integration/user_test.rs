// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use wapyce::application::dto::user_request::RegisterUserDto;
use wapyce::application::use_cases::user_use_case::USER_IN_USE_MESSAGE;
use wapyce::domain::repositories::user_repository::UserRepository;
use wapyce::utils::errors::DomainError;

#[tokio::test]
async fn test_register_user() {
    let app = create_test_app().await;

    let user = app.user("alice").await;
    let found = app.user_repo.find_by_username("alice").await.unwrap();

    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert_eq!(app.users.get_user(user.id).await.unwrap().email, "alice@example.com");
}

#[tokio::test]
async fn test_duplicate_username_is_integrity_error() {
    let app = create_test_app().await;
    app.user("alice").await;

    let err = app
        .users
        .register_user(RegisterUserDto {
            username: "alice".to_string(),
            email: "other@example.com".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Integrity(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let app = create_test_app().await;

    let err = app
        .users
        .register_user(RegisterUserDto {
            username: "bob".to_string(),
            email: "not-an-email".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn test_user_with_validations_cannot_be_deleted() {
    let app = create_test_app().await;
    let site = app.example_site().await;
    let user = app.user("alice").await;
    app.validations
        .start_validation(site.id, user.id)
        .await
        .unwrap();

    let err = app.users.delete_user(user.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ref m) if m == USER_IN_USE_MESSAGE));

    let idle = app.user("bob").await;
    app.users.delete_user(idle.id).await.unwrap();
    assert!(matches!(
        app.users.get_user(idle.id).await,
        Err(DomainError::NotFound { entity: "User" })
    ));
}
