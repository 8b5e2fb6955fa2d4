//! 사용자 수정 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::domain::models::UpdateUserParams;

/// `PUT /user/{id}` 본문. 대상 ID는 경로에서 받습니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    #[validate(email)]
    pub email: String,
}

impl UpdateUserRequest {
    pub fn into_params(self, id: i64) -> UpdateUserParams {
        UpdateUserParams {
            id,
            username: self.username,
            email: self.email,
        }
    }
}
