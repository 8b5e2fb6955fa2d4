//! 서버, 데이터베이스, 사진 클라이언트 설정
//!
//! 모든 값은 환경 변수에서 읽으며, 누락되었거나 파싱할 수 없는 값은
//! 기본값으로 대체됩니다. 파싱 실패는 에러 로그로 남깁니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use log::{error, info};

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// 종료 신호 이후 처리 중인 요청을 기다리는 시간
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// 활성화하면 실행되는 SQL 문을 info 레벨로 기록합니다.
    pub debug_persistence: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoClientConfig {
    pub enabled: bool,
    pub base_url: String,
    pub timeout: Duration,
    /// 서킷을 여는 연속 실패 횟수
    pub failure_threshold: u32,
    /// 서킷이 열린 뒤 재시도(half-open)까지 대기 시간
    pub open_duration: Duration,
}

impl Default for PhotoClientConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://random.dog".to_string(),
            timeout: Duration::from_secs(10),
            failure_threshold: 5,
            open_duration: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub photo_client: PhotoClientConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// * `HOST`, `PORT`, `SERVER_WORKERS`, `SHUTDOWN_TIMEOUT_SECS`
    /// * `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`, `DEBUG_PERSISTENCE`
    /// * `PHOTO_CLIENT_ENABLED`, `PHOTO_CLIENT_BASE_URL`, `PHOTO_CLIENT_TIMEOUT_SECS`,
    ///   `PHOTO_CLIENT_FAILURE_THRESHOLD`, `PHOTO_CLIENT_OPEN_SECS`
    /// * `RATE_LIMIT_PER_SECOND`, `RATE_LIMIT_BURST_SIZE`
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| env::var(key).ok());
        info!("설정 로드됨: {:?}", config);
        config
    }

    /// 임의의 키 조회 함수로 설정을 구성합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let photo_defaults = PhotoClientConfig::default();

        Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_or(&lookup, "PORT", 8080),
                workers: parse_or(&lookup, "SERVER_WORKERS", 4),
                shutdown_timeout: Duration::from_secs(parse_or(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30)),
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL")
                    .unwrap_or_else(|| "sqlite://user_photo_service.db".to_string()),
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5),
                debug_persistence: flag_or(&lookup, "DEBUG_PERSISTENCE", false),
            },
            photo_client: PhotoClientConfig {
                enabled: flag_or(&lookup, "PHOTO_CLIENT_ENABLED", photo_defaults.enabled),
                base_url: lookup("PHOTO_CLIENT_BASE_URL").unwrap_or(photo_defaults.base_url),
                timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "PHOTO_CLIENT_TIMEOUT_SECS",
                    photo_defaults.timeout.as_secs(),
                )),
                failure_threshold: parse_or(
                    &lookup,
                    "PHOTO_CLIENT_FAILURE_THRESHOLD",
                    photo_defaults.failure_threshold,
                ),
                open_duration: Duration::from_secs(parse_or(
                    &lookup,
                    "PHOTO_CLIENT_OPEN_SECS",
                    photo_defaults.open_duration.as_secs(),
                )),
            },
            rate_limit: RateLimitConfig {
                per_second: parse_or(&lookup, "RATE_LIMIT_PER_SECOND", 100),
                burst_size: parse_or(&lookup, "RATE_LIMIT_BURST_SIZE", 200),
            },
        }
    }
}

/// `PROFILE` 값에 해당하는 env 파일 이름. `None`이면 기본 `.env`를 찾습니다.
pub fn env_file_for_profile(profile: &str) -> Option<&'static str> {
    match profile {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}

fn flag_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_lowercase()) {
        Some(v) if matches!(v.as_str(), "true" | "1" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "false" | "0" | "no" | "off") => false,
        Some(v) => {
            error!("{} 파싱 실패: '{}'. 기본값 {} 사용", key, v, default);
            default
        }
        None => default,
    }
}
