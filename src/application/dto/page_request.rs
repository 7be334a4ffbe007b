// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 记录已验证页面请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RecordPageDto {
    /// 所属验证
    pub validation_id: Uuid,
    /// 页面地址
    #[validate(url)]
    pub page_url: String,
}
