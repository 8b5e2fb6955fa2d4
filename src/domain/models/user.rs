//! 사용자 비즈니스 모델
//!
//! 저장소 행([`UserRecord`](crate::domain::entities::users::user::UserRecord))과
//! 분리된 평범한 사용자 값입니다. 사진 URL은 저장되지 않으며 조회할 때마다
//! 외부 사진 API에서 새로 채워집니다.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// 파생 값. 저장소에서 읽은 직후에는 비어 있습니다.
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn with_photo_url(mut self, photo_url: String) -> Self {
        self.photo_url = photo_url;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
}

/// 사용자 수정 파라미터. 사용자명과 이메일만 변경됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserParams {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// 목록 조회 필터
///
/// 필터 자체가 없으면(`None`) 전체 조회이고, `ids_in`이 비어 있으면 결과도 비어 있습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindAllFilter {
    pub ids_in: Vec<i64>,
}
