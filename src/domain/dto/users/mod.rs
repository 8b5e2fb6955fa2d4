//! # User Data Transfer Objects Module
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user_request.rs    # POST /user
//! │   ├── update_user_request.rs    # PUT /user/{id}
//! │   └── search_users_request.rs   # POST /search-users
//! └── response/
//!     └── user_response.rs          # 봉투의 result에 담기는 사용자
//! ```
//!
//! 요청 DTO는 `validator`로 필드를 검증한 뒤 도메인 파라미터로 변환됩니다.
//! 검증 실패는 필드별로 응답 봉투에 담깁니다.
//!
//! ```json
//! {
//!   "result": {
//!     "id": 1,
//!     "username": "alice",
//!     "email": "alice@example.com",
//!     "dog_photo_url": "https://random.dog/abc.jpg",
//!     "created_at": "2024-01-01T00:00:00Z",
//!     "updated_at": "2024-01-01T00:00:00Z"
//!   }
//! }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
