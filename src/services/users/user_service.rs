//! # User Service Implementation
//!
//! 저장소와 사진 클라이언트를 조합하는 사용자 비즈니스 로직입니다.
//!
//! 사용자를 돌려주는 모든 연산(조회, 목록, 생성, 수정)은 결과를 반환하기 전에
//! 사진 URL을 새로 받아 채웁니다(enrichment). 목록은 사용자마다 사진 요청을
//! 동시에 실행하고, 결과는 원래 순서대로 붙입니다. 하나라도 실패하면 부분 결과
//! 없이 전체 연산이 실패하며 재시도하지 않습니다.
//!
//! ```text
//! find_all_users_by_filter
//!   ├── user_repo.find_all_by_filter
//!   └── try_join_all ─┬─ photo_client.random_photo_url  (user 0)
//!                     ├─ photo_client.random_photo_url  (user 1)
//!                     └─ ...
//! ```

use std::sync::Arc;
use std::time::Instant;

use futures_util::future::try_join_all;
use log::debug;

use crate::clients::PhotoClient;
use crate::core::errors::AppResult;
use crate::domain::models::{CreateUserParams, FindAllFilter, UpdateUserParams, User};
use crate::repositories::users::UserRepository;

pub struct UserService {
    user_repo: UserRepository,
    photo_client: Arc<dyn PhotoClient>,
}

impl UserService {
    pub fn new(user_repo: UserRepository, photo_client: Arc<dyn PhotoClient>) -> Self {
        Self {
            user_repo,
            photo_client,
        }
    }

    pub async fn get_user_by_id(&self, id: i64) -> AppResult<User> {
        let user = self.user_repo.get_by_id(id).await?;
        self.enrich(user).await
    }

    pub async fn find_all_users_by_filter(
        &self,
        filter: Option<&FindAllFilter>,
    ) -> AppResult<Vec<User>> {
        let users = self.user_repo.find_all_by_filter(filter).await?;
        self.enrich_all(users).await
    }

    pub async fn create_user(&self, params: &CreateUserParams) -> AppResult<User> {
        let user = self.user_repo.create(params).await?;
        self.enrich(user).await
    }

    pub async fn update_user(&self, params: &UpdateUserParams) -> AppResult<User> {
        let user = self.user_repo.update(params).await?;
        self.enrich(user).await
    }

    pub async fn delete_user_by_id(&self, id: i64) -> AppResult<()> {
        self.user_repo.delete_by_id(id).await
    }

    async fn enrich(&self, user: User) -> AppResult<User> {
        let photo_url = self.photo_client.random_photo_url().await?;
        Ok(user.with_photo_url(photo_url))
    }

    /// 사용자마다 사진 요청을 동시에 실행합니다.
    ///
    /// `try_join_all`은 입력 순서대로 결과를 모으고 첫 에러에서 나머지 요청을
    /// 버립니다. 호출자가 이 future를 버리면 진행 중인 요청도 함께 취소됩니다.
    async fn enrich_all(&self, users: Vec<User>) -> AppResult<Vec<User>> {
        if users.is_empty() {
            return Ok(users);
        }

        let started = Instant::now();
        let photo_urls =
            try_join_all(users.iter().map(|_| self.photo_client.random_photo_url())).await?;

        debug!(
            "사진 {}개 조회 완료: {:?}",
            photo_urls.len(),
            started.elapsed()
        );

        Ok(users
            .into_iter()
            .zip(photo_urls)
            .map(|(user, photo_url)| user.with_photo_url(photo_url))
            .collect())
    }
}
