//! 외부 서비스 클라이언트 모듈
//!
//! 서비스 계층은 [`PhotoClient`] 트레이트에만 의존합니다.
//! 실제 구현은 설정에 따라 [`build_photo_client`]가 선택합니다.

pub mod dog_photo_client;
pub mod photo_client;

pub use dog_photo_client::DogPhotoClient;
pub use photo_client::{NoOpPhotoClient, PhotoClient, PhotoClientError, build_photo_client};
