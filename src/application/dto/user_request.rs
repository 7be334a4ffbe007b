// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 注册用户请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RegisterUserDto {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
    #[validate(email)]
    pub email: String,
}
