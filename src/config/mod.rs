//! # Configuration Module
//!
//! 환경 변수 기반 설정을 한곳에서 관리합니다.
//! `main`에서 `.env.{PROFILE}` 파일을 먼저 로드한 뒤 [`AppConfig::from_env`]로
//! 전체 설정을 한 번 읽어 각 구성 요소의 생성자에 나눠 전달합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SHUTDOWN_TIMEOUT_SECS="30"
//!
//! # 데이터베이스 (SQLite)
//! export DATABASE_URL="sqlite://user_photo_service.db"
//! export DEBUG_PERSISTENCE="true"
//!
//! # 사진 클라이언트
//! export PHOTO_CLIENT_ENABLED="true"
//! export PHOTO_CLIENT_BASE_URL="https://random.dog"
//! export PHOTO_CLIENT_FAILURE_THRESHOLD="5"
//! export PHOTO_CLIENT_OPEN_SECS="30"
//! ```

pub mod app_config;

pub use app_config::*;
