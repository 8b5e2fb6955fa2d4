//! 사진 클라이언트 추상화
//!
//! 사용자 응답에 붙일 무작위 사진 URL을 가져오는 단일 연산을 정의합니다.
//!
//! | 구현 | 동작 |
//! |------|------|
//! | [`DogPhotoClient`] | `GET {base_url}/woof.json` 호출, 서킷 브레이커 적용 |
//! | [`NoOpPhotoClient`] | 네트워크 없이 빈 문자열 반환 |

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use thiserror::Error;

use crate::clients::DogPhotoClient;
use crate::config::PhotoClientConfig;
use crate::core::errors::AppError;

#[derive(Error, Debug)]
pub enum PhotoClientError {
    #[error("photo request failed: {0}")]
    Request(String),

    #[error("photo service responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("photo response could not be decoded: {0}")]
    Decode(String),

    /// 서킷이 열려 있어 호출 자체가 거부됨
    #[error("photo service circuit is open")]
    CircuitOpen,
}

impl From<PhotoClientError> for AppError {
    fn from(err: PhotoClientError) -> Self {
        AppError::ExternalServiceError(err.to_string())
    }
}

#[async_trait]
pub trait PhotoClient: Send + Sync {
    /// 무작위 사진 URL 하나를 가져옵니다.
    async fn random_photo_url(&self) -> Result<String, PhotoClientError>;
}

/// 비활성화 상태의 클라이언트. 외부 호출 없이 빈 URL을 돌려줍니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpPhotoClient;

#[async_trait]
impl PhotoClient for NoOpPhotoClient {
    async fn random_photo_url(&self) -> Result<String, PhotoClientError> {
        Ok(String::new())
    }
}

/// 설정에 맞는 사진 클라이언트를 생성합니다.
pub fn build_photo_client(
    config: &PhotoClientConfig,
) -> Result<Arc<dyn PhotoClient>, PhotoClientError> {
    if config.enabled {
        info!(
            "🐶 사진 클라이언트 활성화: {} (연속 실패 {}회 시 {:?} 차단)",
            config.base_url, config.failure_threshold, config.open_duration
        );
        Ok(Arc::new(DogPhotoClient::new(config)?))
    } else {
        info!("사진 클라이언트 비활성화: 빈 URL 사용");
        Ok(Arc::new(NoOpPhotoClient))
    }
}
