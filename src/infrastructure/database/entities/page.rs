// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub validation_id: Uuid,
    pub page_url: String,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub updated_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::validation::Entity",
        from = "Column::ValidationId",
        to = "super::validation::Column::Id",
        on_delete = "Restrict"
    )]
    Validation,
}

impl Related<super::validation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Validation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
