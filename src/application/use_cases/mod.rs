// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 包含应用程序的所有业务用例实现
/// 每个用例代表一个完整的业务流程，遵循单一职责原则
pub mod site_use_case;
pub mod user_use_case;
pub mod validation_use_case;
