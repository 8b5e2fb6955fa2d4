//! API 라우트 설정 모듈
//!
//! 사용자 엔드포인트와 헬스체크를 등록하고, 바인딩 실패(잘못된 JSON 본문,
//! 숫자가 아닌 경로 ID)도 다른 에러와 같은 응답 봉투로 돌려주도록 추출기 설정을
//! 함께 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::from(context.user_service()))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;

use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    cfg.service(handlers::health::health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `GET /user/{id}`
/// - `POST /user`
/// - `PUT /user/{id}`
/// - `DELETE /user/{id}`
/// - `POST /search-users`
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::get_user)
        .service(handlers::users::create_user)
        .service(handlers::users::update_user)
        .service(handlers::users::delete_user)
        .service(handlers::users::search_users);
}

fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );
}
