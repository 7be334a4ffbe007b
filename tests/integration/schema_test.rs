// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::setup_db;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Statement};

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = setup_db().await;

    // Already applied, so this is a no-op
    Migrator::up(db.as_ref(), None).await.unwrap();

    let pending = Migrator::get_pending_migrations(db.as_ref()).await.unwrap();
    assert!(pending.is_empty());
}

#[tokio::test]
async fn test_partial_unique_index_exists() {
    let db = setup_db().await;

    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT sql FROM sqlite_master WHERE type = 'index' AND name = 'uq_validations_user_started'",
        ))
        .await
        .unwrap()
        .expect("index should exist");
    let sql: String = row.try_get("", "sql").unwrap();

    assert!(sql.contains("WHERE"), "{}", sql);
}
