// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::site::{Site, SiteStatus};
use async_trait::async_trait;
use uuid::Uuid;

/// 站点仓库特质
///
/// 定义站点数据访问接口
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// 创建站点
    ///
    /// # 返回值
    ///
    /// * `Ok(Site)` - 成功创建后返回站点
    /// * `Err(RepositoryError::UniqueViolation)` - `base_url` 或 `github_url` 已存在
    async fn create(&self, site: &Site) -> Result<Site, RepositoryError>;
    /// 根据ID查找站点
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Site>, RepositoryError>;
    /// 根据基础地址查找站点
    async fn find_by_base_url(&self, base_url: &str) -> Result<Option<Site>, RepositoryError>;
    /// 列出站点，可按状态过滤，按名称排序
    async fn list(&self, status: Option<SiteStatus>) -> Result<Vec<Site>, RepositoryError>;
    /// 更新站点
    async fn update(&self, site: &Site) -> Result<Site, RepositoryError>;
    /// 删除站点
    ///
    /// 被验证引用时返回 `RepositoryError::ForeignKeyViolation`
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
