// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::site::SiteStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 注册站点请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RegisterSiteDto {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(url)]
    pub base_url: String,
    #[validate(url)]
    pub github_url: String,
    /// 初始状态，缺省为启用
    pub status: Option<SiteStatus>,
}
