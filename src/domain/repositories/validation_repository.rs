// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::validation::{Validation, ValidationStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 验证仓库特质
///
/// 定义验证会话的数据访问接口
#[async_trait]
pub trait ValidationRepository: Send + Sync {
    /// 创建验证
    ///
    /// 同一用户已有进行中的验证时，存储层的部分唯一索引会拒绝写入，
    /// 返回 `RepositoryError::UniqueViolation`
    async fn create(&self, validation: &Validation) -> Result<Validation, RepositoryError>;

    /// 根据ID查找验证
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Validation>, RepositoryError>;

    /// 查找用户当前进行中的验证
    async fn find_started_by_user(&self, user_id: Uuid)
        -> Result<Option<Validation>, RepositoryError>;

    /// 检查用户是否有其他进行中的验证
    ///
    /// # 参数
    ///
    /// * `user_id` - 用户ID
    /// * `exclude_id` - 排除的验证ID（更新自身时传入）
    async fn has_started_for_user(
        &self,
        user_id: Uuid,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, RepositoryError>;

    /// 根据站点查找所有验证
    async fn find_by_site(&self, site_id: Uuid) -> Result<Vec<Validation>, RepositoryError>;

    /// 统计引用站点的验证数量
    async fn count_by_site(&self, site_id: Uuid) -> Result<u64, RepositoryError>;

    /// 统计引用用户的验证数量
    async fn count_by_user(&self, user_id: Uuid) -> Result<u64, RepositoryError>;

    /// 更新验证的修改时间
    ///
    /// 状态与结束时间只通过 `transition` 修改
    async fn update(&self, validation: &Validation) -> Result<Validation, RepositoryError>;

    /// 按预期状态更新状态
    ///
    /// 仅当当前状态等于 `expected` 时写入，返回是否写入成功
    async fn transition(
        &self,
        id: Uuid,
        expected: ValidationStatus,
        next: ValidationStatus,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<bool, RepositoryError>;

    /// 删除验证
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
