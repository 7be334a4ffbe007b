// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::timestamps::Timestamps;
use crate::utils::errors::DomainError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 用户实体
///
/// 只保存验证所需的身份信息，认证由外部负责
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    /// 用户唯一标识符
    pub id: Uuid,
    /// 用户名，全局唯一
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    /// 邮箱
    #[validate(email)]
    pub email: String,
    /// 创建/更新时间
    pub timestamps: Timestamps,
}

impl User {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            timestamps: Timestamps::now(),
        }
    }

    pub fn clean(&self) -> Result<(), DomainError> {
        self.validate().map_err(DomainError::from)
    }
}
