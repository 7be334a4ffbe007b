// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::timestamps::Timestamps;
use crate::utils::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// 站点实体
///
/// 表示一个接受无障碍验证的网站。`base_url` 与 `github_url`
/// 在存储层各自唯一。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Site {
    /// 站点唯一标识符
    pub id: Uuid,
    /// 站点名称
    #[validate(length(
        min = 1,
        max = 100,
        message = "Ensure this value has between 1 and 100 characters."
    ))]
    pub name: String,
    /// 站点基础地址，页面地址必须以它开头
    #[validate(
        length(max = 200, message = "Ensure this value has at most 200 characters."),
        custom(function = "crate::utils::validators::http_url_rule")
    )]
    pub base_url: String,
    /// 站点的 GitHub 仓库地址
    #[validate(
        length(max = 200, message = "Ensure this value has at most 200 characters."),
        custom(function = "crate::utils::validators::github_url_rule")
    )]
    pub github_url: String,
    /// 站点状态
    pub status: SiteStatus,
    /// 创建/更新时间
    pub timestamps: Timestamps,
}

/// 站点状态枚举
///
/// 数值与存储层一致：Active=0, Deactivated=1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SiteStatus {
    /// 启用
    #[default]
    Active = 0,
    /// 停用
    Deactivated = 1,
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SiteStatus::Active => write!(f, "active"),
            SiteStatus::Deactivated => write!(f, "deactivated"),
        }
    }
}

impl FromStr for SiteStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(SiteStatus::Active),
            "deactivated" => Ok(SiteStatus::Deactivated),
            _ => Err(()),
        }
    }
}

impl Site {
    /// 创建一个新的站点，状态为启用
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, github_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            base_url: base_url.into(),
            github_url: github_url.into(),
            status: SiteStatus::Active,
            timestamps: Timestamps::now(),
        }
    }

    /// 校验所有字段
    ///
    /// 唯一性由存储层保证，这里只检查格式
    pub fn clean(&self) -> Result<(), DomainError> {
        self.validate().map_err(DomainError::from)
    }

    pub fn is_active(&self) -> bool {
        self.status == SiteStatus::Active
    }

    pub fn is_deactivated(&self) -> bool {
        self.status == SiteStatus::Deactivated
    }

    pub fn activate(&mut self) {
        self.set_status(SiteStatus::Active);
    }

    pub fn deactivate(&mut self) {
        self.set_status(SiteStatus::Deactivated);
    }

    /// 在启用与停用之间切换，对关联的验证没有影响
    pub fn toggle_status(&mut self) {
        let next = match self.status {
            SiteStatus::Active => SiteStatus::Deactivated,
            SiteStatus::Deactivated => SiteStatus::Active,
        };
        self.set_status(next);
    }

    pub fn set_status(&mut self, status: SiteStatus) {
        self.status = status;
        self.timestamps.touch();
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.base_url)
    }
}
