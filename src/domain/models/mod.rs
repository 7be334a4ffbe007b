// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 站点（site）：接受无障碍验证的网站
/// - 验证（validation）：用户对站点的一次验证会话及其状态机
/// - 页面（page）：验证过程中检查过的站点页面
/// - 用户（user）：执行验证的用户身份
/// - 时间戳（timestamps）：所有实体共享的创建/更新时间
pub mod page;
pub mod site;
pub mod timestamps;
pub mod user;
pub mod validation;
