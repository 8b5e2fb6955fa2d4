//! random.dog 사진 클라이언트
//!
//! 모든 호출은 `failsafe` 서킷 브레이커를 통과합니다. 전송 실패, 2xx 외 응답,
//! 본문 해석 실패가 연속으로 `failure_threshold`번 발생하면 서킷이 열리고,
//! `open_duration` 동안 호출은 네트워크에 닿지 않고 즉시 거부됩니다.
//! 대기 시간이 지나면 다음 호출 하나로 상태를 확인합니다(half-open).

use async_trait::async_trait;
use failsafe::backoff::{self, Constant};
use failsafe::failure_policy::{self, ConsecutiveFailures};
use failsafe::futures::CircuitBreaker;
use failsafe::{Config, StateMachine};
use log::{debug, warn};
use serde::Deserialize;

use crate::clients::photo_client::{PhotoClient, PhotoClientError};
use crate::config::PhotoClientConfig;

type Breaker = StateMachine<ConsecutiveFailures<Constant>, ()>;

/// 에러 메시지에 담는 응답 본문의 최대 바이트 수
const MAX_ERROR_BODY_BYTES: usize = 512;

#[derive(Debug, Deserialize)]
struct WoofResponse {
    url: String,
}

pub struct DogPhotoClient {
    http: reqwest::Client,
    endpoint: String,
    breaker: Breaker,
}

impl DogPhotoClient {
    pub fn new(config: &PhotoClientConfig) -> Result<Self, PhotoClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PhotoClientError::Request(e.to_string()))?;

        let policy = failure_policy::consecutive_failures(
            config.failure_threshold.max(1),
            backoff::constant(config.open_duration),
        );
        let breaker = Config::new().failure_policy(policy).build();

        Ok(Self {
            http,
            endpoint: format!("{}/woof.json", config.base_url.trim_end_matches('/')),
            breaker,
        })
    }

    async fn fetch(&self) -> Result<String, PhotoClientError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| PhotoClientError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PhotoClientError::Status {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        let woof = response
            .json::<WoofResponse>()
            .await
            .map_err(|e| PhotoClientError::Decode(e.to_string()))?;

        Ok(woof.url)
    }
}

fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY_BYTES {
        let mut end = MAX_ERROR_BODY_BYTES;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }
    body
}

#[async_trait]
impl PhotoClient for DogPhotoClient {
    async fn random_photo_url(&self) -> Result<String, PhotoClientError> {
        debug!("사진 요청: {}", self.endpoint);

        match self.breaker.call(self.fetch()).await {
            Ok(url) => Ok(url),
            Err(failsafe::Error::Inner(e)) => {
                warn!("사진 요청 실패: {}", e);
                Err(e)
            }
            Err(failsafe::Error::Rejected) => {
                warn!("사진 서킷 열림: {} 호출 거부", self.endpoint);
                Err(PhotoClientError::CircuitOpen)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer, failure_threshold: u32) -> PhotoClientConfig {
        PhotoClientConfig {
            enabled: true,
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
            failure_threshold,
            open_duration: Duration::from_secs(60),
        }
    }

    #[actix_web::test]
    async fn test_returns_url_from_woof_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/woof.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "fileSizeBytes": 1024, "url": "https://random.dog/a.jpg" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = DogPhotoClient::new(&config_for(&server, 3)).unwrap();

        assert_eq!(
            client.random_photo_url().await.unwrap(),
            "https://random.dog/a.jpg"
        );
    }

    #[actix_web::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/woof.json"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let client = DogPhotoClient::new(&config_for(&server, 3)).unwrap();

        match client.random_photo_url().await {
            Err(PhotoClientError::Status { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "unavailable");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_undecodable_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/woof.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = DogPhotoClient::new(&config_for(&server, 3)).unwrap();

        assert!(matches!(
            client.random_photo_url().await,
            Err(PhotoClientError::Decode(_))
        ));
    }

    #[actix_web::test]
    async fn test_circuit_opens_after_consecutive_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/woof.json"))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&server)
            .await;

        let client = DogPhotoClient::new(&config_for(&server, 2)).unwrap();

        assert!(matches!(
            client.random_photo_url().await,
            Err(PhotoClientError::Status { status: 500, .. })
        ));
        assert!(matches!(
            client.random_photo_url().await,
            Err(PhotoClientError::Status { status: 500, .. })
        ));
        assert!(matches!(
            client.random_photo_url().await,
            Err(PhotoClientError::CircuitOpen)
        ));
        assert!(matches!(
            client.random_photo_url().await,
            Err(PhotoClientError::CircuitOpen)
        ));
    }

    #[actix_web::test]
    async fn test_circuit_half_opens_after_cool_down() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/woof.json"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/woof.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "url": "https://random.dog/b.jpg" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = PhotoClientConfig {
            open_duration: Duration::from_millis(100),
            ..config_for(&server, 1)
        };
        let client = DogPhotoClient::new(&config).unwrap();

        assert!(matches!(
            client.random_photo_url().await,
            Err(PhotoClientError::Status { status: 500, .. })
        ));
        assert!(matches!(
            client.random_photo_url().await,
            Err(PhotoClientError::CircuitOpen)
        ));

        actix_web::rt::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(
            client.random_photo_url().await.unwrap(),
            "https://random.dog/b.jpg"
        );
    }

    #[actix_web::test]
    async fn test_error_body_is_truncated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/woof.json"))
            .respond_with(ResponseTemplate::new(502).set_body_string("가".repeat(1000)))
            .mount(&server)
            .await;

        let client = DogPhotoClient::new(&config_for(&server, 3)).unwrap();

        match client.random_photo_url().await {
            Err(PhotoClientError::Status { status, body }) => {
                assert_eq!(status, 502);
                assert!(body.len() <= MAX_ERROR_BODY_BYTES);
                assert!(body.len() > MAX_ERROR_BODY_BYTES - 4);
                assert!(body.chars().all(|c| c == '가'));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
