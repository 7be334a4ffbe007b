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

use crate::domain::models::page::Page;
use crate::domain::models::timestamps::Timestamps;
use crate::domain::repositories::page_repository::PageRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::page as page_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 已验证页面仓库实现
#[derive(Clone)]
pub struct PageRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl PageRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<page_entity::Model> for Page {
    fn from(model: page_entity::Model) -> Self {
        Self {
            id: model.id,
            validation_id: model.validation_id,
            page_url: model.page_url,
            timestamps: Timestamps {
                created_at: model.created_at.into(),
                updated_at: model.updated_at.into(),
            },
        }
    }
}

#[async_trait]
impl PageRepository for PageRepositoryImpl {
    async fn create(&self, page: &Page) -> Result<Page, RepositoryError> {
        let model = page_entity::ActiveModel {
            id: Set(page.id),
            validation_id: Set(page.validation_id),
            page_url: Set(page.page_url.clone()),
            created_at: Set(page.timestamps.created_at.into()),
            updated_at: Set(page.timestamps.updated_at.into()),
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Page>, RepositoryError> {
        let model = page_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_validation(&self, validation_id: Uuid) -> Result<Vec<Page>, RepositoryError> {
        let models = page_entity::Entity::find()
            .filter(page_entity::Column::ValidationId.eq(validation_id))
            .order_by_asc(page_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count_by_validation(&self, validation_id: Uuid) -> Result<u64, RepositoryError> {
        let count = page_entity::Entity::find()
            .filter(page_entity::Column::ValidationId.eq(validation_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = page_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
