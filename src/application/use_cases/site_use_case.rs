// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::site_request::RegisterSiteDto;
use crate::domain::models::site::{Site, SiteStatus};
use crate::domain::repositories::site_repository::SiteRepository;
use crate::domain::repositories::validation_repository::ValidationRepository;
use crate::domain::repositories::RepositoryError;
use crate::utils::errors::DomainError;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

pub const SITE_IN_USE_MESSAGE: &str =
    "Cannot delete the site because it is referenced by validations.";

/// 站点用例
///
/// 管理员注册站点、切换站点状态以及删除未被引用的站点
pub struct SiteUseCase<SR, VR> {
    site_repo: Arc<SR>,
    validation_repo: Arc<VR>,
}

impl<SR, VR> SiteUseCase<SR, VR>
where
    SR: SiteRepository + 'static,
    VR: ValidationRepository + 'static,
{
    pub fn new(site_repo: Arc<SR>, validation_repo: Arc<VR>) -> Self {
        Self {
            site_repo,
            validation_repo,
        }
    }

    /// 注册站点
    ///
    /// 先校验字段，再写入；`base_url` 或 `github_url` 重复时
    /// 返回 `DomainError::Integrity`
    pub async fn register_site(&self, dto: RegisterSiteDto) -> Result<Site, DomainError> {
        dto.validate()?;

        let mut site = Site::new(dto.name, dto.base_url, dto.github_url);
        if let Some(status) = dto.status {
            site.status = status;
        }
        site.clean()?;

        let site = self.site_repo.create(&site).await?;
        info!("Registered site {} as {}", site, site.id);
        Ok(site)
    }

    pub async fn get_site(&self, id: Uuid) -> Result<Site, DomainError> {
        self.site_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Site"))
    }

    pub async fn list_sites(&self) -> Result<Vec<Site>, DomainError> {
        Ok(self.site_repo.list(None).await?)
    }

    pub async fn list_active_sites(&self) -> Result<Vec<Site>, DomainError> {
        Ok(self.site_repo.list(Some(SiteStatus::Active)).await?)
    }

    /// 设置站点状态，不影响已有的验证
    pub async fn set_site_status(&self, id: Uuid, status: SiteStatus) -> Result<Site, DomainError> {
        let mut site = self.get_site(id).await?;
        site.set_status(status);

        let site = self.site_repo.update(&site).await?;
        info!("Site {} is now {}", site.id, site.status);
        Ok(site)
    }

    pub async fn toggle_site_status(&self, id: Uuid) -> Result<Site, DomainError> {
        let site = self.get_site(id).await?;
        let next = match site.status {
            SiteStatus::Active => SiteStatus::Deactivated,
            SiteStatus::Deactivated => SiteStatus::Active,
        };
        self.set_site_status(id, next).await
    }

    /// 删除站点
    ///
    /// 被验证引用的站点不能删除，返回 `DomainError::Conflict`
    pub async fn delete_site(&self, id: Uuid) -> Result<(), DomainError> {
        let references = self.validation_repo.count_by_site(id).await?;
        if references > 0 {
            warn!("Refusing to delete site {} referenced by {} validation(s)", id, references);
            return Err(DomainError::Conflict(SITE_IN_USE_MESSAGE.to_string()));
        }

        self.site_repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => DomainError::not_found("Site"),
            other => other.into(),
        })?;
        info!("Deleted site {}", id);
        Ok(())
    }
}
