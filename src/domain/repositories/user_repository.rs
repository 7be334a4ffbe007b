// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::user::User;
use async_trait::async_trait;
use uuid::Uuid;

/// 用户仓库特质
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 创建用户
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;
    /// 根据ID查找用户
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    /// 根据用户名查找用户
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    /// 删除用户
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
