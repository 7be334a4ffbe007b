// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// 仓库错误类型
///
/// 由 `DbErr` 转换而来，唯一约束和外键约束冲突被单独归类
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(DbErr),
    /// 唯一约束冲突
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
    /// 外键约束冲突（被引用的记录不能删除）
    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => RepositoryError::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                RepositoryError::ForeignKeyViolation(msg)
            }
            _ => match err {
                DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepositoryError::NotFound,
                other => RepositoryError::Database(other),
            },
        }
    }
}
