//! 사용자 테이블 행
//!
//! `users` 테이블의 한 행을 그대로 표현하는 영속 엔티티입니다.
//! 사진 URL 컬럼은 없으며, 비즈니스 모델로 변환할 때 빈 값으로 시작합니다.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::User;

#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            photo_url: String::new(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
