// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::timestamps::Timestamps;
use crate::domain::models::validation::{Validation, ValidationStatus};
use crate::domain::repositories::validation_repository::ValidationRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::sea_orm_active_enums::SeaValidationStatus;
use crate::infrastructure::database::entities::validation as validation_entity;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// 验证仓库实现
///
/// 每个用户只能有一个进行中的验证由数据库的部分唯一索引
/// `uq_validations_user_started` 保证
#[derive(Clone)]
pub struct ValidationRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ValidationRepositoryImpl {
    /// 创建新的验证仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn started() -> SeaValidationStatus {
        SeaValidationStatus::from(ValidationStatus::Started)
    }
}

impl From<validation_entity::Model> for Validation {
    fn from(model: validation_entity::Model) -> Self {
        Self {
            id: model.id,
            site_id: model.site_id,
            user_id: model.user_id,
            start_date: model.start_date.into(),
            end_date: model.end_date.map(Into::into),
            status: model.status.into(),
            timestamps: Timestamps {
                created_at: model.created_at.into(),
                updated_at: model.updated_at.into(),
            },
        }
    }
}

impl From<&Validation> for validation_entity::ActiveModel {
    fn from(validation: &Validation) -> Self {
        Self {
            id: Set(validation.id),
            site_id: Set(validation.site_id),
            user_id: Set(validation.user_id),
            start_date: Set(validation.start_date.into()),
            end_date: Set(validation.end_date.map(Into::into)),
            status: Set(validation.status.into()),
            created_at: Set(validation.timestamps.created_at.into()),
            updated_at: Set(validation.timestamps.updated_at.into()),
        }
    }
}

#[async_trait]
impl ValidationRepository for ValidationRepositoryImpl {
    async fn create(&self, validation: &Validation) -> Result<Validation, RepositoryError> {
        let model: validation_entity::ActiveModel = validation.into();

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Validation>, RepositoryError> {
        let model = validation_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_started_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Validation>, RepositoryError> {
        let model = validation_entity::Entity::find()
            .filter(validation_entity::Column::UserId.eq(user_id))
            .filter(validation_entity::Column::Status.eq(Self::started()))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn has_started_for_user(
        &self,
        user_id: Uuid,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, RepositoryError> {
        let mut query = validation_entity::Entity::find()
            .filter(validation_entity::Column::UserId.eq(user_id))
            .filter(validation_entity::Column::Status.eq(Self::started()));

        if let Some(id) = exclude_id {
            query = query.filter(validation_entity::Column::Id.ne(id));
        }

        let count = query.count(self.db.as_ref()).await?;
        debug!("User {} has {} other started validation(s)", user_id, count);
        Ok(count > 0)
    }

    async fn find_by_site(&self, site_id: Uuid) -> Result<Vec<Validation>, RepositoryError> {
        let models = validation_entity::Entity::find()
            .filter(validation_entity::Column::SiteId.eq(site_id))
            .order_by_asc(validation_entity::Column::StartDate)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count_by_site(&self, site_id: Uuid) -> Result<u64, RepositoryError> {
        let count = validation_entity::Entity::find()
            .filter(validation_entity::Column::SiteId.eq(site_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    async fn count_by_user(&self, user_id: Uuid) -> Result<u64, RepositoryError> {
        let count = validation_entity::Entity::find()
            .filter(validation_entity::Column::UserId.eq(user_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    async fn update(&self, validation: &Validation) -> Result<Validation, RepositoryError> {
        let mut model: validation_entity::ActiveModel =
            validation_entity::Entity::find_by_id(validation.id)
                .one(self.db.as_ref())
                .await?
                .ok_or(RepositoryError::NotFound)?
                .into();

        // status and end_date only move through `transition`
        model.updated_at = Set(validation.timestamps.updated_at.into());

        let updated = model.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn transition(
        &self,
        id: Uuid,
        expected: ValidationStatus,
        next: ValidationStatus,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<bool, RepositoryError> {
        let changes = validation_entity::ActiveModel {
            status: Set(next.into()),
            end_date: Set(end_date.map(Into::into)),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = validation_entity::Entity::update_many()
            .set(changes)
            .filter(validation_entity::Column::Id.eq(id))
            .filter(validation_entity::Column::Status.eq(SeaValidationStatus::from(expected)))
            .exec(self.db.as_ref())
            .await?;

        debug!(
            "Validation {} transition {} -> {} affected {} row(s)",
            id, expected, next, result.rows_affected
        );
        Ok(result.rows_affected == 1)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = validation_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
