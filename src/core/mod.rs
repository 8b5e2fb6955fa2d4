//! # Core Module
//!
//! - [`context`] - 생성자 주입 기반 애플리케이션 컨테이너 ([`AppContext`])
//! - [`errors`] - 통합 에러 타입과 HTTP 응답 변환 ([`AppError`])

pub mod context;
pub mod errors;

pub use context::*;
pub use errors::*;
