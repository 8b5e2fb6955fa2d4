//! # Application Error Handling System
//!
//! 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! 모든 계층(저장소, 외부 클라이언트, 서비스, 핸들러)은 최종적으로 [`AppError`]로
//! 수렴하며, Actix-Web의 `ResponseError` 구현을 통해 표준 응답 봉투로 변환됩니다.
//!
//! ## 응답 형식
//!
//! 에러 응답은 성공 응답과 같은 봉투를 사용하며 `errors` 필드만 채워집니다.
//!
//! ```json
//! {
//!   "errors": {
//!     "global": [{ "code": "NotFound", "message": "resource not found" }]
//!   }
//! }
//! ```
//!
//! 검증 에러는 필드 이름을 키로 사용합니다.
//!
//! ```json
//! {
//!   "errors": {
//!     "email": [{ "code": "email", "message": "Validation for email failed on the 'email' tag" }]
//!   }
//! }
//! ```
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | 상태 코드 | 코드 |
//! |------|-----------|------|
//! | `NotFound` | 404 | `NotFound` |
//! | `ConflictError` | 409 | `Constraint` |
//! | `ValidationError` | 400 | 검증 태그 (`email`, `length`, ...) |
//! | `BadRequest` | 400 | `InvalidRequest` |
//! | 나머지 | 500 | `unknown` |
//!
//! 5xx 에러는 응답 전에 `error` 레벨로 기록됩니다.

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::dto::envelope::{ApiResponse, ErrorDetail, GLOBAL_ERROR_KEY};

#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 연산 실패 (연결, 쿼리, 마이그레이션)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 요청 본문의 필드 검증 실패
    ///
    /// `validator` 크레이트가 반환한 필드별 에러를 그대로 보존하여
    /// 응답의 `errors` 맵에 필드 단위로 펼쳐집니다.
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    /// 경로 파라미터 또는 JSON 본문 바인딩 실패
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// 요청한 리소스가 존재하지 않음
    ///
    /// # 예제
    /// ```rust,ignore
    /// let record = query.fetch_optional(pool).await?
    ///     .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장소 제약 조건 위반 (예: 이메일 중복)
    #[error("Constraint error: {0}")]
    ConflictError(String),

    /// 외부 서비스 호출 실패 (사진 API, 서킷 브레이커 차단 포함)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 봉투의 `errors` 맵을 구성합니다.
    pub fn field_errors(&self) -> BTreeMap<String, Vec<ErrorDetail>> {
        match self {
            AppError::ValidationError(errors) => validation_field_errors(errors),
            AppError::NotFound(_) => global(ErrorDetail::new("NotFound", "resource not found")),
            AppError::ConflictError(message) => global(ErrorDetail::new("Constraint", message)),
            AppError::BadRequest(message) => global(ErrorDetail::new("InvalidRequest", message)),
            _ => global(ErrorDetail::new("unknown", self.to_string())),
        }
    }
}

fn global(detail: ErrorDetail) -> BTreeMap<String, Vec<ErrorDetail>> {
    BTreeMap::from([(GLOBAL_ERROR_KEY.to_string(), vec![detail])])
}

fn validation_field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<ErrorDetail>> {
    let mut fields = BTreeMap::new();

    for (field, field_errors) in errors.field_errors() {
        let field = field.to_string();
        let details = field_errors
            .iter()
            .map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| {
                        format!("Validation for {} failed on the '{}' tag", field, e.code)
                    });
                ErrorDetail::new(e.code.to_string(), message)
            })
            .collect::<Vec<_>>();
        fields.insert(field, details);
    }

    fields
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 에러를 표준 응답 봉투로 변환합니다.
    ///
    /// 분류되지 않은 에러(5xx)는 내부 정보가 로그에 남도록 먼저 기록합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            error!("Unhandled error: {}", self);
        }

        HttpResponse::build(status).json(ApiResponse::<()>::failure(self.field_errors()))
    }
}

/// `sqlx` 에러를 도메인 에러로 분류합니다.
///
/// 행이 없으면 `NotFound`, 유니크 제약 위반이면 `ConflictError`,
/// 그 외에는 `DatabaseError`가 됩니다.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::NotFound(err.to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::ConflictError(db_err.message().to_string())
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::DatabaseError(format!("migration failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
