//! # Application Context
//!
//! 애플리케이션의 모든 구성 요소를 생성자 주입으로 조립하는 컨테이너입니다.
//! 전역 상태 없이 설정에서 한 번 만들어 서버와 핸들러에 그대로 전달합니다.
//!
//! ## 조립 순서
//!
//! ```text
//! AppConfig
//!   ├─ Database::connect(database)
//!   ├─ SchemaMigrator::new(Database)
//!   ├─ build_photo_client(photo_client)
//!   └─ UserService::new(UserRepository::new(Database), PhotoClient)
//! ```
//!
//! ## 생명주기
//!
//! - [`AppContext::init`] - 스키마 마이그레이션 적용
//! - [`AppContext::cleanup`] - 모든 사용자 삭제 (테스트/초기화 전용)
//!
//! ```rust,ignore
//! let context = AppContext::from_config(&config).await?;
//! context.init().await?;
//! ApiServer::new(&config, context).bind()?.run().await?;
//! ```

use std::sync::Arc;

use log::info;

use crate::clients::{PhotoClient, build_photo_client};
use crate::config::AppConfig;
use crate::core::errors::AppResult;
use crate::db::{Database, SchemaMigrator};
use crate::repositories::users::UserRepository;
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppContext {
    database: Database,
    user_repo: UserRepository,
    user_service: Arc<UserService>,
}

impl AppContext {
    /// 이미 준비된 데이터베이스와 사진 클라이언트로 컨텍스트를 조립합니다.
    pub fn new(database: Database, photo_client: Arc<dyn PhotoClient>) -> Self {
        let user_repo = UserRepository::new(database.clone());
        let user_service = Arc::new(UserService::new(user_repo.clone(), photo_client));

        Self {
            database,
            user_repo,
            user_service,
        }
    }

    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        info!("📡 데이터베이스 연결 중...");
        let database = Database::connect(&config.database).await?;
        let photo_client = build_photo_client(&config.photo_client)?;

        Ok(Self::new(database, photo_client))
    }

    pub async fn init(&self) -> AppResult<()> {
        SchemaMigrator::new(self.database.clone()).migrate().await
    }

    pub async fn cleanup(&self) -> AppResult<()> {
        let deleted = self.user_repo.delete_all().await?;
        info!("🧹 사용자 {}명 삭제", deleted);
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn user_service(&self) -> Arc<UserService> {
        Arc::clone(&self.user_service)
    }
}
