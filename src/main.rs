//! 사용자 사진 서비스 메인 애플리케이션
//!
//! 환경 설정을 읽어 SQLite 연결, 스키마 마이그레이션, 사진 클라이언트를 준비한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::env;
use std::path::PathBuf;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_photo_service::config::{AppConfig, env_file_for_profile};
use user_photo_service::core::context::AppContext;
use user_photo_service::server::ApiServer;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // env 파일의 RUST_LOG가 적용되도록 로드가 먼저
    let (profile, loaded) = load_env_file();
    init_logging();

    info!("Current profile: {}", profile);
    match loaded {
        Ok(path) => info!("{} 파일 로드 됨", path.display()),
        Err(e) => error!("env 파일 로드 실패: {}", e),
    }

    info!("🚀 사용자 사진 서비스 시작중...");

    let config = AppConfig::from_env();

    let context = AppContext::from_config(&config)
        .await
        .map_err(std::io::Error::other)?;

    context.init().await.map_err(std::io::Error::other)?;

    info!("✅ 모든 구성 요소가 초기화되었습니다!");

    ApiServer::new(&config, context).bind()?.run().await
}

/// `PROFILE`(기본값 `dev`)에 맞는 env 파일을 로드합니다.
///
/// 로깅 초기화 전에 호출되므로 결과를 돌려주고 기록은 호출자가 합니다.
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() -> (String, Result<PathBuf, dotenv::Error>) {
    let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match env_file_for_profile(&profile) {
        Some(file) => dotenv::from_filename(file),
        None => dotenv(),
    };

    (profile, loaded)
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// # SQL 문까지 보려면
/// RUST_LOG=info,sqlx=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
