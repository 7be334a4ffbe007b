// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use wapyce::application::dto::site_request::RegisterSiteDto;
use wapyce::application::dto::user_request::RegisterUserDto;
use wapyce::application::use_cases::site_use_case::SiteUseCase;
use wapyce::application::use_cases::user_use_case::UserUseCase;
use wapyce::application::use_cases::validation_use_case::ValidationUseCase;
use wapyce::config::settings::{DatabaseSettings, LoggingSettings};
use wapyce::domain::models::site::Site;
use wapyce::domain::models::user::User;
use wapyce::infrastructure::database::connection;
use wapyce::infrastructure::repositories::page_repo_impl::PageRepositoryImpl;
use wapyce::infrastructure::repositories::site_repo_impl::SiteRepositoryImpl;
use wapyce::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use wapyce::infrastructure::repositories::validation_repo_impl::ValidationRepositoryImpl;
use wapyce::utils::telemetry;

pub type Sites = SiteUseCase<SiteRepositoryImpl, ValidationRepositoryImpl>;
pub type Users = UserUseCase<UserRepositoryImpl, ValidationRepositoryImpl>;
pub type Validations = ValidationUseCase<
    ValidationRepositoryImpl,
    PageRepositoryImpl,
    SiteRepositoryImpl,
    UserRepositoryImpl,
>;

/// 测试应用
///
/// 每个实例持有一个独立的内存数据库
pub struct TestApp {
    pub db: Arc<DatabaseConnection>,
    pub site_repo: Arc<SiteRepositoryImpl>,
    pub user_repo: Arc<UserRepositoryImpl>,
    pub validation_repo: Arc<ValidationRepositoryImpl>,
    pub page_repo: Arc<PageRepositoryImpl>,
    pub sites: Sites,
    pub users: Users,
    pub validations: Validations,
}

pub async fn setup_db() -> Arc<DatabaseConnection> {
    telemetry::init_telemetry(&LoggingSettings::default());

    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(5),
        idle_timeout: None,
        run_migrations: true,
    };

    let db = connection::create_pool(&settings)
        .await
        .expect("Failed to open in-memory database");
    connection::run_migrations(&db)
        .await
        .expect("Failed to run migrations");
    Arc::new(db)
}

pub async fn create_test_app() -> TestApp {
    let db = setup_db().await;

    let site_repo = Arc::new(SiteRepositoryImpl::new(db.clone()));
    let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
    let validation_repo = Arc::new(ValidationRepositoryImpl::new(db.clone()));
    let page_repo = Arc::new(PageRepositoryImpl::new(db.clone()));

    TestApp {
        sites: SiteUseCase::new(site_repo.clone(), validation_repo.clone()),
        users: UserUseCase::new(user_repo.clone(), validation_repo.clone()),
        validations: ValidationUseCase::new(
            validation_repo.clone(),
            page_repo.clone(),
            site_repo.clone(),
            user_repo.clone(),
        ),
        db,
        site_repo,
        user_repo,
        validation_repo,
        page_repo,
    }
}

pub fn site_dto(name: &str, base_url: &str, github_url: &str) -> RegisterSiteDto {
    RegisterSiteDto {
        name: name.to_string(),
        base_url: base_url.to_string(),
        github_url: github_url.to_string(),
        status: None,
    }
}

impl TestApp {
    pub async fn example_site(&self) -> Site {
        self.sites
            .register_site(site_dto(
                "Site",
                "http://www.example.com/",
                "https://github.com/carlsonsantana/wapyce",
            ))
            .await
            .expect("Failed to register site")
    }

    pub async fn user(&self, username: &str) -> User {
        self.users
            .register_user(RegisterUserDto {
                username: username.to_string(),
                email: format!("{}@example.com", username),
            })
            .await
            .expect("Failed to register user")
    }
}
