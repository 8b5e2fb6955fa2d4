//! 스키마 마이그레이션
//!
//! `migrations/` 디렉터리의 SQL 파일을 바이너리에 포함시켜 시작 시 적용합니다.
//! 이미 적용된 버전은 건너뜁니다.

use log::{debug, info};
use sqlx::migrate::Migrator;

use crate::core::errors::AppResult;
use crate::db::Database;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub struct SchemaMigrator {
    database: Database,
}

impl SchemaMigrator {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub async fn migrate(&self) -> AppResult<()> {
        info!("Migrating");

        for migration in MIGRATOR.iter() {
            debug!("  {} {}", migration.version, migration.description);
        }

        MIGRATOR.run(self.database.pool()).await?;

        info!("Migration complete");
        Ok(())
    }
}
