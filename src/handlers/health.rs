use actix_web::{HttpResponse, get};
use serde_json::json;

/// 로드밸런서/모니터링용 헬스체크
///
/// ```bash
/// curl http://localhost:8080/health
/// # {"status":"UP"}
/// ```
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "UP" }))
}
