//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소 행 (sqlx FromRow)
//! ├── models    - 계층 간에 전달되는 비즈니스 값
//! └── dto       - HTTP 요청/응답 및 응답 봉투
//! ```
//!
//! 핸들러는 DTO를 모델로 변환해 서비스에 넘기고, 저장소는 엔티티를 모델로
//! 변환해 돌려줍니다. 엔티티가 HTTP 계층까지 새어 나가지 않습니다.

pub mod entities;
pub mod dto;
pub mod models;
