// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::page::Page;
use async_trait::async_trait;
use uuid::Uuid;

/// 已验证页面仓库特质
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// 创建页面
    ///
    /// 同一验证中重复的地址返回 `RepositoryError::UniqueViolation`
    async fn create(&self, page: &Page) -> Result<Page, RepositoryError>;
    /// 根据ID查找页面
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Page>, RepositoryError>;
    /// 查找验证下的所有页面，按创建时间排序
    async fn find_by_validation(&self, validation_id: Uuid) -> Result<Vec<Page>, RepositoryError>;
    /// 统计验证下的页面数量
    async fn count_by_validation(&self, validation_id: Uuid) -> Result<u64, RepositoryError>;
    /// 删除页面
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
