//! 응답 봉투 DTO
//!
//! 모든 HTTP 응답은 `{result?, errors?}` 형태의 봉투로 감싸집니다.
//! 값이 없는 필드는 직렬화에서 생략되므로 삭제 성공 응답은 `{}`가 됩니다.

use std::collections::BTreeMap;

use serde::Serialize;

/// 특정 필드에 속하지 않는 에러가 모이는 키
pub const GLOBAL_ERROR_KEY: &str = "global";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorDetail {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,

    /// 필드 이름(또는 `global`)별 에러 목록
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<ErrorDetail>>>,
}

impl<T> ApiResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            result: Some(result),
            errors: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            result: None,
            errors: None,
        }
    }

    pub fn failure(errors: BTreeMap<String, Vec<ErrorDetail>>) -> Self {
        Self {
            result: None,
            errors: Some(errors),
        }
    }
}
