//! HTTP 서버 생명주기
//!
//! [`ApiServer`]는 미들웨어 스택을 구성해 주소에 바인딩하고, [`BoundServer`]는
//! 실제 바인딩된 주소와 제어 핸들을 노출합니다. Actix 서버는 SIGINT/SIGTERM을
//! 받으면 새 연결을 멈추고 `shutdown_timeout` 동안 처리 중인 요청을 기다립니다.
//! 종료 후에는 데이터베이스 연결 풀을 닫습니다.
//!
//! 미들웨어 적용 순서 (바깥 → 안):
//!
//! ```text
//! NormalizePath → Logger → Cors → Governor → routes
//! ```

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use log::info;

use crate::config::{AppConfig, RateLimitConfig, ServerConfig};
use crate::core::context::AppContext;
use crate::routes::configure_all_routes;

pub struct ApiServer {
    server: ServerConfig,
    rate_limit: RateLimitConfig,
    context: AppContext,
}

impl ApiServer {
    pub fn new(config: &AppConfig, context: AppContext) -> Self {
        Self {
            server: config.server.clone(),
            rate_limit: config.rate_limit.clone(),
            context,
        }
    }

    /// 설정된 주소에 바인딩합니다. 포트 0이면 운영체제가 빈 포트를 고릅니다.
    ///
    /// # Errors
    ///
    /// * 포트 바인딩 실패
    /// * 초당 요청 수 또는 버스트 크기가 0인 경우
    pub fn bind(self) -> io::Result<BoundServer> {
        // requests_per_second(0)은 빌더 내부에서 0으로 나누므로 미리 거부합니다.
        if self.rate_limit.per_second == 0 {
            return Err(invalid_rate_limit(&self.rate_limit));
        }

        let governor_conf = GovernorConfigBuilder::default()
            .requests_per_second(self.rate_limit.per_second)
            .burst_size(self.rate_limit.burst_size)
            .use_headers()
            .finish()
            .ok_or_else(|| invalid_rate_limit(&self.rate_limit))?;

        info!(
            "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
            self.rate_limit.per_second, self.rate_limit.burst_size
        );

        let user_service = web::Data::from(self.context.user_service());

        let http_server = HttpServer::new(move || {
            App::new()
                .wrap(Governor::new(&governor_conf))
                .wrap(configure_cors())
                .wrap(middleware::Logger::default())
                .wrap(middleware::NormalizePath::trim())
                .app_data(user_service.clone())
                .configure(configure_all_routes)
        })
        .workers(self.server.workers.max(1))
        .shutdown_timeout(self.server.shutdown_timeout.as_secs())
        .bind(self.server.bind_address())?;

        let addrs = http_server.addrs();

        Ok(BoundServer {
            server: http_server.run(),
            addrs,
            shutdown_timeout: self.server.shutdown_timeout,
            context: self.context,
        })
    }
}

pub struct BoundServer {
    server: Server,
    addrs: Vec<SocketAddr>,
    shutdown_timeout: Duration,
    context: AppContext,
}

impl BoundServer {
    pub fn addrs(&self) -> &[SocketAddr] {
        &self.addrs
    }

    /// 외부에서 서버를 멈출 때 사용하는 핸들
    pub fn handle(&self) -> ServerHandle {
        self.server.handle()
    }

    /// 서버가 종료될 때까지 실행합니다.
    pub async fn run(self) -> io::Result<()> {
        for addr in &self.addrs {
            info!("🌐 서버가 http://{} 에서 실행중입니다", addr);
            info!("📍 Health check: http://{}/health", addr);
        }
        info!("종료 대기 시간: {:?}", self.shutdown_timeout);

        let result = self.server.await;

        info!("🛑 서버 종료");
        self.context.database().close().await;

        result
    }
}

fn invalid_rate_limit(rate_limit: &RateLimitConfig) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("잘못된 Rate Limiting 설정: {:?}", rate_limit),
    )
}

/// 로컬 프론트엔드 개발 서버에서의 호출을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
