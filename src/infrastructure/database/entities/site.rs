// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::sea_orm_active_enums::SeaSiteStatus;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub base_url: String,
    #[sea_orm(unique)]
    pub github_url: String,
    pub status: SeaSiteStatus,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub updated_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::validation::Entity")]
    Validation,
}

impl Related<super::validation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Validation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
