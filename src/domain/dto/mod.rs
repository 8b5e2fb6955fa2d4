//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체와 공통 응답 봉투입니다.

pub mod envelope;
pub mod users;

pub use envelope::*;
pub use users::*;
