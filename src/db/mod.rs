//! Database Connection Management Module
//!
//! SQLite 연결 풀 관리를 담당하는 모듈입니다.
//! [`Database`]는 `sqlx` 풀을 감싼 가벼운 핸들로, 복제해도 같은 풀을 공유합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export DATABASE_URL="sqlite://user_photo_service.db"
//! export DATABASE_MAX_CONNECTIONS="5"
//! export DEBUG_PERSISTENCE="true"   # SQL 문을 info 레벨로 기록
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! let database = Database::connect(&config.database).await?;
//! SchemaMigrator::new(database.clone()).migrate().await?;
//! let repo = UserRepository::new(database);
//! ```

pub mod migrator;

use std::str::FromStr;

use log::{LevelFilter, info};
use sqlx::ConnectOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppResult, ErrorContext};

pub use migrator::SchemaMigrator;

#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 설정에 따라 연결 풀을 생성합니다. 파일이 없으면 새로 만듭니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let statement_level = if config.debug_persistence {
            LevelFilter::Info
        } else {
            LevelFilter::Debug
        };

        let options = SqliteConnectOptions::from_str(&config.url)
            .with_context(|| format!("잘못된 DATABASE_URL: {}", config.url))?
            .create_if_missing(true)
            .log_statements(statement_level);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        info!("✅ SQLite 연결 성공: {}", config.url);

        Ok(Self { pool })
    }

    /// 프로세스 메모리에만 존재하는 데이터베이스를 엽니다.
    ///
    /// 메모리 DB는 연결마다 따로 생기므로 단일 연결을 계속 유지합니다.
    pub async fn in_memory() -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("SQLite 연결 풀 종료");
    }
}
