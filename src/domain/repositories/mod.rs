// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 站点仓库（site_repository）
/// - 用户仓库（user_repository）
/// - 验证仓库（validation_repository）
/// - 页面仓库（page_repository）
mod error;
pub mod page_repository;
pub mod site_repository;
pub mod user_repository;
pub mod validation_repository;

pub use error::RepositoryError;
