// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

use super::m20251001_000001_create_users::Users;
use super::m20251001_000002_create_sites::Sites;

/// 每个用户最多一个进行中的验证（status = 0）
const ACTIVE_SESSION_INDEX: &str = "uq_validations_user_started";

/// 创建验证表
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Validations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Validations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Validations::SiteId).uuid().not_null())
                    .col(ColumnDef::new(Validations::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Validations::StartDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Validations::EndDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Validations::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Validations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Validations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_validations_site")
                            .from(Validations::Table, Validations::SiteId)
                            .to(Sites::Table, Sites::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_validations_user")
                            .from(Validations::Table, Validations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_validations_user_status")
                    .table(Validations::Table)
                    .col(Validations::UserId)
                    .col(Validations::Status)
                    .to_owned(),
            )
            .await?;

        // Partial unique index, expressed in SQL understood by both Postgres and SQLite
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS {} ON validations (user_id) WHERE status = 0",
                ACTIVE_SESSION_INDEX
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Validations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Validations {
    Table,
    Id,
    SiteId,
    UserId,
    StartDate,
    EndDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
