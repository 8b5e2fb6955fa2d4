//! 사용자 사진 서비스 백엔드
//!
//! 사용자 CRUD API에 외부 무작위 사진 API 조회를 결합한 서비스입니다.
//! 사용자를 돌려주는 모든 응답에는 요청 시점에 새로 받은 사진 URL이 붙습니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 조회, 수정, 삭제, ID 목록 검색
//! - **사진 enrichment**: 사용자별 동시 요청, 순서 보존, 하나라도 실패하면 전체 실패
//! - **서킷 브레이커**: `failsafe` 기반 연속 실패 차단
//! - **SQLite**: `sqlx` 연결 풀과 내장 마이그레이션
//! - **생성자 주입**: [`core::context::AppContext`]가 모든 의존성을 조립
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 바인딩, 검증, 응답 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │    Services     │ ──▶ │  Photo Client   │ ← 서킷 브레이커
//! └─────────────────┘     └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← SQL
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     SQLite      │
//! └─────────────────┘
//! ```

pub mod clients;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod server;
pub mod services;
