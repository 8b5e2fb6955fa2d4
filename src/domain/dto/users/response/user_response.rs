//! 사용자 응답 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::User;

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub dog_photo_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            dog_photo_url: user.photo_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
