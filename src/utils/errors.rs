// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::RepositoryError;
use thiserror::Error;

/// 领域错误类型
///
/// 所有错误都原样返回给调用方，领域层不吞掉也不重试任何错误。
#[derive(Error, Debug)]
pub enum DomainError {
    /// 字段值格式错误或不符合规则
    #[error("Validation error: {0}")]
    Validation(String),

    /// 与已有状态冲突（每个用户仅一个进行中的验证、删除保护）
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 状态转换不合法
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    /// 前置条件不满足
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// 存储层唯一约束冲突
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// 记录不存在
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// 无权操作
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 其他存储错误
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl DomainError {
    pub fn not_found(entity: &'static str) -> Self {
        DomainError::NotFound { entity }
    }
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueViolation(msg) => DomainError::Integrity(msg),
            RepositoryError::ForeignKeyViolation(msg) => DomainError::Conflict(msg),
            RepositoryError::NotFound => DomainError::NotFound { entity: "Record" },
            other => DomainError::Repository(other),
        }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{}: {}", field, msg),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        messages.sort();
        DomainError::Validation(messages.join("; "))
    }
}
