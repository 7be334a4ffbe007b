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
use crate::domain::models::user::User;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::user as user_entity;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

/// 用户仓库实现
#[derive(Clone)]
pub struct UserRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<user_entity::Model> for User {
    fn from(model: user_entity::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            timestamps: Timestamps {
                created_at: model.created_at.into(),
                updated_at: model.updated_at.into(),
            },
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let model = user_entity::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            created_at: Set(user.timestamps.created_at.into()),
            updated_at: Set(user.timestamps.updated_at.into()),
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find()
            .filter(user_entity::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = user_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
