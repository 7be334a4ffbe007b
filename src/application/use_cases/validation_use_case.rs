// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::page_request::RecordPageDto;
use crate::domain::models::page::Page;
use crate::domain::models::validation::{
    Validation, ValidationStatus, ALREADY_STARTED_MESSAGE, ONLY_STARTED_CANCEL_MESSAGE,
    ONLY_STARTED_FINISH_MESSAGE,
};
use crate::domain::repositories::page_repository::PageRepository;
use crate::domain::repositories::site_repository::SiteRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::validation_repository::ValidationRepository;
use crate::domain::repositories::RepositoryError;
use crate::utils::errors::DomainError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

pub const SITE_DEACTIVATED_MESSAGE: &str = "Deactivated sites cannot be validated.";
pub const PAGE_ON_CLOSED_VALIDATION_MESSAGE: &str =
    "Pages can only be recorded on started validations.";
pub const PAGE_NOT_OWNED_MESSAGE: &str = "Only the owner of the validation can delete its pages.";
pub const VALIDATION_IN_USE_MESSAGE: &str =
    "Cannot delete the validation because it has validated pages.";
pub const STATUS_CHANGE_MESSAGE: &str =
    "The status of a validation can only change by canceling or finishing it.";
pub const NEW_VALIDATION_NOT_STARTED_MESSAGE: &str = "New validations must be started.";
pub const PAGE_DELETE_ON_CLOSED_VALIDATION_MESSAGE: &str =
    "Pages can only be deleted from started validations.";

/// 验证用例
///
/// 协调验证会话的生命周期：开始、记录页面、取消、完成。
///
/// 同一用户只能有一个进行中的验证。写入前先查询一次以给出明确的错误，
/// 并发写入时由数据库部分唯一索引兜底，冲突同样转换为
/// `DomainError::Conflict`。状态转换使用带预期状态的条件更新，
/// 并发的两个转换只有一个能成功。
pub struct ValidationUseCase<VR, PR, SR, UR> {
    validation_repo: Arc<VR>,
    page_repo: Arc<PR>,
    site_repo: Arc<SR>,
    user_repo: Arc<UR>,
}

impl<VR, PR, SR, UR> ValidationUseCase<VR, PR, SR, UR>
where
    VR: ValidationRepository + 'static,
    PR: PageRepository + 'static,
    SR: SiteRepository + 'static,
    UR: UserRepository + 'static,
{
    pub fn new(
        validation_repo: Arc<VR>,
        page_repo: Arc<PR>,
        site_repo: Arc<SR>,
        user_repo: Arc<UR>,
    ) -> Self {
        Self {
            validation_repo,
            page_repo,
            site_repo,
            user_repo,
        }
    }

    /// 开始验证
    ///
    /// # 参数
    ///
    /// * `site_id` - 要验证的站点，必须处于启用状态
    /// * `user_id` - 执行验证的用户
    ///
    /// # 返回值
    ///
    /// * `Ok(Validation)` - 新建的进行中验证
    /// * `Err(DomainError::Conflict)` - 用户已有进行中的验证
    /// * `Err(DomainError::PreconditionFailed)` - 站点已停用
    /// * `Err(DomainError::NotFound)` - 站点或用户不存在
    pub async fn start_validation(
        &self,
        site_id: Uuid,
        user_id: Uuid,
    ) -> Result<Validation, DomainError> {
        let validation = Validation::new(site_id, user_id);
        let validation = self.save_validation(&validation).await?;
        info!(
            "User {} started validation {} of site {}",
            user_id, validation.id, site_id
        );
        Ok(validation)
    }

    /// 校验并保存验证（新建或更新）
    ///
    /// 每次写入前都检查同一用户是否有其他进行中的验证（排除自身）。
    /// 新建的验证必须是进行中，且站点启用、用户存在；
    /// 已存在的验证不能通过保存修改状态或结束时间。
    pub async fn save_validation(&self, validation: &Validation) -> Result<Validation, DomainError> {
        let stored = self.validation_repo.find_by_id(validation.id).await?;

        match &stored {
            Some(stored) => {
                if stored.status != validation.status
                    || micros(stored.end_date) != micros(validation.end_date)
                {
                    warn!(
                        "Rejected status change of validation {} from {} to {}",
                        validation.id, stored.status, validation.status
                    );
                    return Err(DomainError::InvalidStateTransition(
                        STATUS_CHANGE_MESSAGE.to_string(),
                    ));
                }
            }
            None => self.check_new_validation(validation).await?,
        }

        self.ensure_single_active_session(validation).await?;

        let result = match stored {
            Some(_) => {
                let mut changed = validation.clone();
                changed.timestamps.touch();
                self.validation_repo.update(&changed).await
            }
            None => self.validation_repo.create(validation).await,
        };

        result.map_err(|e| match e {
            RepositoryError::UniqueViolation(_) => {
                warn!(
                    "Concurrent start rejected by storage for user {}",
                    validation.user_id
                );
                DomainError::Conflict(ALREADY_STARTED_MESSAGE.to_string())
            }
            other => other.into(),
        })
    }

    /// 取消验证
    ///
    /// 只有进行中的验证可以取消，结束时间为当前时间
    pub async fn cancel_validation(&self, id: Uuid) -> Result<Validation, DomainError> {
        let mut validation = self.get_validation(id).await?;

        validation.cancel()?;
        self.persist_transition(&validation, ONLY_STARTED_CANCEL_MESSAGE)
            .await?;

        info!("Validation {} canceled", id);
        Ok(validation)
    }

    /// 完成验证
    ///
    /// 只有进行中且至少记录了一个页面的验证可以完成
    pub async fn finish_validation(&self, id: Uuid) -> Result<Validation, DomainError> {
        let mut validation = self.get_validation(id).await?;
        let pages = self.page_repo.count_by_validation(id).await?;

        validation.finish(pages)?;
        self.persist_transition(&validation, ONLY_STARTED_FINISH_MESSAGE)
            .await?;

        info!("Validation {} finished with {} page(s)", id, pages);
        Ok(validation)
    }

    /// 记录已验证的页面
    ///
    /// # 返回值
    ///
    /// * `Ok(Page)` - 新记录的页面
    /// * `Err(DomainError::Validation)` - 页面地址不以站点基础地址开头
    /// * `Err(DomainError::InvalidStateTransition)` - 验证已结束
    /// * `Err(DomainError::Integrity)` - 同一验证中已记录该页面
    pub async fn record_page(&self, dto: RecordPageDto) -> Result<Page, DomainError> {
        dto.validate()?;

        let validation = self.get_validation(dto.validation_id).await?;
        if !validation.is_started() {
            return Err(DomainError::InvalidStateTransition(
                PAGE_ON_CLOSED_VALIDATION_MESSAGE.to_string(),
            ));
        }

        let site = self
            .site_repo
            .find_by_id(validation.site_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Site"))?;

        let page = Page::new(validation.id, dto.page_url);
        page.clean(&site)?;

        let page = self.page_repo.create(&page).await?;
        info!("Recorded page {} for validation {}", page, validation.id);
        Ok(page)
    }

    pub async fn get_validation(&self, id: Uuid) -> Result<Validation, DomainError> {
        self.validation_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Validation"))
    }

    /// 用户当前进行中的验证
    pub async fn current_validation(&self, user_id: Uuid) -> Result<Option<Validation>, DomainError> {
        Ok(self.validation_repo.find_started_by_user(user_id).await?)
    }

    pub async fn list_site_validations(&self, site_id: Uuid) -> Result<Vec<Validation>, DomainError> {
        Ok(self.validation_repo.find_by_site(site_id).await?)
    }

    pub async fn list_pages(&self, validation_id: Uuid) -> Result<Vec<Page>, DomainError> {
        Ok(self.page_repo.find_by_validation(validation_id).await?)
    }

    /// 删除页面
    ///
    /// 只有验证的所有者可以删除，且验证必须仍在进行中
    pub async fn delete_page(&self, page_id: Uuid, user_id: Uuid) -> Result<(), DomainError> {
        let page = self
            .page_repo
            .find_by_id(page_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Page"))?;
        let validation = self.get_validation(page.validation_id).await?;

        if validation.user_id != user_id {
            warn!("User {} tried to delete page {} of another user", user_id, page_id);
            return Err(DomainError::Forbidden(PAGE_NOT_OWNED_MESSAGE.to_string()));
        }
        if !validation.is_started() {
            return Err(DomainError::InvalidStateTransition(
                PAGE_DELETE_ON_CLOSED_VALIDATION_MESSAGE.to_string(),
            ));
        }

        self.page_repo.delete(page_id).await?;
        info!("Deleted page {}", page_id);
        Ok(())
    }

    /// 删除验证，已有页面时返回 `DomainError::Conflict`
    pub async fn delete_validation(&self, id: Uuid) -> Result<(), DomainError> {
        let pages = self.page_repo.count_by_validation(id).await?;
        if pages > 0 {
            return Err(DomainError::Conflict(VALIDATION_IN_USE_MESSAGE.to_string()));
        }

        self.validation_repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => DomainError::not_found("Validation"),
            other => other.into(),
        })?;
        info!("Deleted validation {}", id);
        Ok(())
    }

    async fn check_new_validation(&self, validation: &Validation) -> Result<(), DomainError> {
        if !validation.is_started() {
            return Err(DomainError::InvalidStateTransition(
                NEW_VALIDATION_NOT_STARTED_MESSAGE.to_string(),
            ));
        }

        let site = self
            .site_repo
            .find_by_id(validation.site_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Site"))?;
        if !site.is_active() {
            return Err(DomainError::PreconditionFailed(
                SITE_DEACTIVATED_MESSAGE.to_string(),
            ));
        }

        if self.user_repo.find_by_id(validation.user_id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }
        Ok(())
    }

    async fn ensure_single_active_session(&self, validation: &Validation) -> Result<(), DomainError> {
        let taken = self
            .validation_repo
            .has_started_for_user(validation.user_id, Some(validation.id))
            .await?;

        if taken {
            warn!(
                "User {} already has a started validation",
                validation.user_id
            );
            return Err(DomainError::Conflict(ALREADY_STARTED_MESSAGE.to_string()));
        }
        Ok(())
    }

    async fn persist_transition(
        &self,
        validation: &Validation,
        lost_race_message: &str,
    ) -> Result<(), DomainError> {
        let applied = self
            .validation_repo
            .transition(
                validation.id,
                ValidationStatus::Started,
                validation.status,
                validation.end_date,
            )
            .await?;

        if !applied {
            return Err(DomainError::InvalidStateTransition(
                lost_race_message.to_string(),
            ));
        }
        Ok(())
    }
}

// Postgres keeps microseconds, so compare end dates at that precision
fn micros(date: Option<DateTime<Utc>>) -> Option<i64> {
    date.map(|d| d.timestamp_micros())
}
