//! 사용자 생성 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::domain::models::CreateUserParams;

/// `POST /user` 본문
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    #[validate(email)]
    pub email: String,
}

impl From<CreateUserRequest> for CreateUserParams {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
        }
    }
}
