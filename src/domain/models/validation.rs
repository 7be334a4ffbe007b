// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::timestamps::Timestamps;
use crate::utils::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const ALREADY_STARTED_MESSAGE: &str = "Already exists a validation for the same user.";
pub const ONLY_STARTED_CANCEL_MESSAGE: &str = "Only started validations can be canceled.";
pub const ONLY_STARTED_FINISH_MESSAGE: &str = "Only started validations can be finished.";
pub const NO_PAGES_MESSAGE: &str =
    "The validation can be finished when at least one page has validated.";

/// 验证实体
///
/// 表示某个用户对某个站点的一次验证会话。
/// 状态转换遵循以下流程：
/// Started → Canceled | Finished
///
/// Canceled 与 Finished 为终态。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    /// 验证唯一标识符
    pub id: Uuid,
    /// 被验证的站点
    pub site_id: Uuid,
    /// 执行验证的用户
    pub user_id: Uuid,
    /// 开始时间，创建时写入，之后不再修改
    pub start_date: DateTime<Utc>,
    /// 结束时间，取消或完成时写入
    pub end_date: Option<DateTime<Utc>>,
    /// 验证状态
    pub status: ValidationStatus,
    /// 创建/更新时间
    pub timestamps: Timestamps,
}

/// 验证状态枚举
///
/// 数值与存储层一致：Started=0, Canceled=1, Finished=2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// 进行中
    #[default]
    Started = 0,
    /// 已取消
    Canceled = 1,
    /// 已完成
    Finished = 2,
}

impl ValidationStatus {
    /// 是否为终态
    pub fn is_terminal(&self) -> bool {
        match self {
            ValidationStatus::Started => false,
            ValidationStatus::Canceled | ValidationStatus::Finished => true,
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationStatus::Started => write!(f, "started"),
            ValidationStatus::Canceled => write!(f, "canceled"),
            ValidationStatus::Finished => write!(f, "finished"),
        }
    }
}

impl FromStr for ValidationStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "started" => Ok(ValidationStatus::Started),
            "canceled" => Ok(ValidationStatus::Canceled),
            "finished" => Ok(ValidationStatus::Finished),
            _ => Err(()),
        }
    }
}

impl Validation {
    /// 创建一个进行中的验证
    pub fn new(site_id: Uuid, user_id: Uuid) -> Self {
        let timestamps = Timestamps::now();
        Self {
            id: Uuid::new_v4(),
            site_id,
            user_id,
            start_date: timestamps.created_at,
            end_date: None,
            status: ValidationStatus::Started,
            timestamps,
        }
    }

    pub fn is_started(&self) -> bool {
        self.status == ValidationStatus::Started
    }

    pub fn is_canceled(&self) -> bool {
        self.status == ValidationStatus::Canceled
    }

    pub fn is_finished(&self) -> bool {
        self.status == ValidationStatus::Finished
    }

    /// 取消验证
    ///
    /// 用户未完成所有页面时放弃本次验证
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 状态变为 Canceled，结束时间为当前时间
    /// * `Err(DomainError::InvalidStateTransition)` - 验证不是进行中
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        match self.status {
            ValidationStatus::Started => {
                self.close(ValidationStatus::Canceled);
                Ok(())
            }
            ValidationStatus::Canceled | ValidationStatus::Finished => Err(
                DomainError::InvalidStateTransition(ONLY_STARTED_CANCEL_MESSAGE.to_string()),
            ),
        }
    }

    /// 完成验证
    ///
    /// # 参数
    ///
    /// * `page_count` - 已记录的页面数量，至少为 1
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 状态变为 Finished，结束时间为当前时间
    /// * `Err(DomainError::InvalidStateTransition)` - 验证不是进行中
    /// * `Err(DomainError::PreconditionFailed)` - 尚未记录任何页面
    pub fn finish(&mut self, page_count: u64) -> Result<(), DomainError> {
        match self.status {
            ValidationStatus::Started => {
                if page_count == 0 {
                    return Err(DomainError::PreconditionFailed(NO_PAGES_MESSAGE.to_string()));
                }
                self.close(ValidationStatus::Finished);
                Ok(())
            }
            ValidationStatus::Canceled | ValidationStatus::Finished => Err(
                DomainError::InvalidStateTransition(ONLY_STARTED_FINISH_MESSAGE.to_string()),
            ),
        }
    }

    fn close(&mut self, status: ValidationStatus) {
        self.status = status;
        self.end_date = Some(Utc::now());
        self.timestamps.touch();
    }
}
