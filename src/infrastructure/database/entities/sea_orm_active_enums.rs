// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::site::SiteStatus;
use crate::domain::models::validation::ValidationStatus;
use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum SeaSiteStatus {
    #[sea_orm(num_value = 0)]
    Active,
    #[sea_orm(num_value = 1)]
    Deactivated,
}

impl From<SiteStatus> for SeaSiteStatus {
    fn from(status: SiteStatus) -> Self {
        match status {
            SiteStatus::Active => SeaSiteStatus::Active,
            SiteStatus::Deactivated => SeaSiteStatus::Deactivated,
        }
    }
}

impl From<SeaSiteStatus> for SiteStatus {
    fn from(status: SeaSiteStatus) -> Self {
        match status {
            SeaSiteStatus::Active => SiteStatus::Active,
            SeaSiteStatus::Deactivated => SiteStatus::Deactivated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum SeaValidationStatus {
    #[sea_orm(num_value = 0)]
    Started,
    #[sea_orm(num_value = 1)]
    Canceled,
    #[sea_orm(num_value = 2)]
    Finished,
}

impl From<ValidationStatus> for SeaValidationStatus {
    fn from(status: ValidationStatus) -> Self {
        match status {
            ValidationStatus::Started => SeaValidationStatus::Started,
            ValidationStatus::Canceled => SeaValidationStatus::Canceled,
            ValidationStatus::Finished => SeaValidationStatus::Finished,
        }
    }
}

impl From<SeaValidationStatus> for ValidationStatus {
    fn from(status: SeaValidationStatus) -> Self {
        match status {
            SeaValidationStatus::Started => ValidationStatus::Started,
            SeaValidationStatus::Canceled => ValidationStatus::Canceled,
            SeaValidationStatus::Finished => ValidationStatus::Finished,
        }
    }
}
