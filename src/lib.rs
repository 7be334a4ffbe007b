// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含站点、用户和验证会话的用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体和仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供数据库连接、实体映射和仓库实现
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型、校验函数和日志初始化
pub mod utils;
