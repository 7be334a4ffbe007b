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

use std::sync::Arc;
use tracing::info;
use wapyce::application::use_cases::site_use_case::SiteUseCase;
use wapyce::config::settings::Settings;
use wapyce::infrastructure::database::connection;
use wapyce::infrastructure::repositories::site_repo_impl::SiteRepositoryImpl;
use wapyce::infrastructure::repositories::validation_repo_impl::ValidationRepositoryImpl;
use wapyce::utils::telemetry;

/// 主函数
///
/// 加载配置、连接数据库并应用迁移，然后报告已注册站点的概况
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging);
    info!("Starting wapyce...");

    // 3. Connect to database
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");

    if settings.database.run_migrations {
        connection::run_migrations(db.as_ref()).await?;
    }

    // 4. Report schema state
    let site_repo = Arc::new(SiteRepositoryImpl::new(db.clone()));
    let validation_repo = Arc::new(ValidationRepositoryImpl::new(db.clone()));
    let sites = SiteUseCase::new(site_repo, validation_repo);

    let all = sites.list_sites().await?;
    let active = sites.list_active_sites().await?;
    info!(
        total = all.len(),
        active = active.len(),
        "Schema ready"
    );

    Ok(())
}
