//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 [`crate::db::Database`] 핸들을 생성자로 받아 SQL을 실행합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(database.clone());
//! let user = user_repo.get_by_id(1).await?;
//! ```

pub mod users;
