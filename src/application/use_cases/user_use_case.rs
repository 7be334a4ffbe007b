// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::user_request::RegisterUserDto;
use crate::domain::models::user::User;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::validation_repository::ValidationRepository;
use crate::domain::repositories::RepositoryError;
use crate::utils::errors::DomainError;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

pub const USER_IN_USE_MESSAGE: &str =
    "Cannot delete the user because it is referenced by validations.";

/// 用户用例
pub struct UserUseCase<UR, VR> {
    user_repo: Arc<UR>,
    validation_repo: Arc<VR>,
}

impl<UR, VR> UserUseCase<UR, VR>
where
    UR: UserRepository + 'static,
    VR: ValidationRepository + 'static,
{
    pub fn new(user_repo: Arc<UR>, validation_repo: Arc<VR>) -> Self {
        Self {
            user_repo,
            validation_repo,
        }
    }

    /// 注册用户，用户名重复时返回 `DomainError::Integrity`
    pub async fn register_user(&self, dto: RegisterUserDto) -> Result<User, DomainError> {
        dto.validate()?;

        let user = User::new(dto.username, dto.email);
        user.clean()?;

        let user = self.user_repo.create(&user).await?;
        info!("Registered user {} as {}", user.username, user.id);
        Ok(user)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// 删除用户，被验证引用时返回 `DomainError::Conflict`
    pub async fn delete_user(&self, id: Uuid) -> Result<(), DomainError> {
        let references = self.validation_repo.count_by_user(id).await?;
        if references > 0 {
            warn!("Refusing to delete user {} referenced by {} validation(s)", id, references);
            return Err(DomainError::Conflict(USER_IN_USE_MESSAGE.to_string()));
        }

        self.user_repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => DomainError::not_found("User"),
            other => other.into(),
        })?;
        info!("Deleted user {}", id);
        Ok(())
    }
}
