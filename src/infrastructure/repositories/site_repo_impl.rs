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

use crate::domain::models::site::{Site, SiteStatus};
use crate::domain::models::timestamps::Timestamps;
use crate::domain::repositories::site_repository::SiteRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::sea_orm_active_enums::SeaSiteStatus;
use crate::infrastructure::database::entities::site as site_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// 站点仓库实现
///
/// 基于SeaORM实现的站点数据访问层
#[derive(Clone)]
pub struct SiteRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SiteRepositoryImpl {
    /// 创建新的站点仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<site_entity::Model> for Site {
    fn from(model: site_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            base_url: model.base_url,
            github_url: model.github_url,
            status: model.status.into(),
            timestamps: Timestamps {
                created_at: model.created_at.into(),
                updated_at: model.updated_at.into(),
            },
        }
    }
}

impl From<&Site> for site_entity::ActiveModel {
    fn from(site: &Site) -> Self {
        Self {
            id: Set(site.id),
            name: Set(site.name.clone()),
            base_url: Set(site.base_url.clone()),
            github_url: Set(site.github_url.clone()),
            status: Set(site.status.into()),
            created_at: Set(site.timestamps.created_at.into()),
            updated_at: Set(site.timestamps.updated_at.into()),
        }
    }
}

#[async_trait]
impl SiteRepository for SiteRepositoryImpl {
    async fn create(&self, site: &Site) -> Result<Site, RepositoryError> {
        let model: site_entity::ActiveModel = site.into();

        let inserted = model.insert(self.db.as_ref()).await?;
        debug!("Inserted site {} ({})", inserted.id, inserted.base_url);
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Site>, RepositoryError> {
        let model = site_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_base_url(&self, base_url: &str) -> Result<Option<Site>, RepositoryError> {
        let model = site_entity::Entity::find()
            .filter(site_entity::Column::BaseUrl.eq(base_url))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self, status: Option<SiteStatus>) -> Result<Vec<Site>, RepositoryError> {
        let mut query = site_entity::Entity::find().order_by_asc(site_entity::Column::Name);

        if let Some(status) = status {
            query = query.filter(site_entity::Column::Status.eq(SeaSiteStatus::from(status)));
        }

        let models = query.all(self.db.as_ref()).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, site: &Site) -> Result<Site, RepositoryError> {
        let mut model: site_entity::ActiveModel = site_entity::Entity::find_by_id(site.id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.name = Set(site.name.clone());
        model.base_url = Set(site.base_url.clone());
        model.github_url = Set(site.github_url.clone());
        model.status = Set(site.status.into());
        model.updated_at = Set(site.timestamps.updated_at.into());

        let updated = model.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = site_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
