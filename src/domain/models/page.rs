// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::site::Site;
use super::timestamps::Timestamps;
use crate::utils::errors::DomainError;
use crate::utils::validators::validate_page_prefix;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// 已验证页面实体
///
/// 在某次验证中检查过的一个站点页面。创建后不可修改，
/// 同一次验证中同一地址只能记录一次。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Page {
    /// 页面唯一标识符
    pub id: Uuid,
    /// 所属验证
    pub validation_id: Uuid,
    /// 页面地址
    #[validate(
        length(max = 200, message = "Ensure this value has at most 200 characters."),
        custom(function = "crate::utils::validators::http_url_rule")
    )]
    pub page_url: String,
    /// 创建/更新时间
    pub timestamps: Timestamps,
}

impl Page {
    pub fn new(validation_id: Uuid, page_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            validation_id,
            page_url: page_url.into(),
            timestamps: Timestamps::now(),
        }
    }

    /// 校验页面
    ///
    /// # 参数
    ///
    /// * `site` - 所属验证对应的站点
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 地址格式正确且以站点基础地址开头
    /// * `Err(DomainError::Validation)` - 校验失败
    pub fn clean(&self, site: &Site) -> Result<(), DomainError> {
        self.validate()?;
        validate_page_prefix(&self.page_url, &site.base_url)
            .map_err(|e| DomainError::Validation(e.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.page_url)
    }
}
