use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use user_photo_service::clients::{NoOpPhotoClient, PhotoClient, PhotoClientError};
use user_photo_service::core::context::AppContext;
use user_photo_service::db::Database;
use user_photo_service::routes::configure_all_routes;

struct StaticPhotoClient(&'static str);

#[async_trait]
impl PhotoClient for StaticPhotoClient {
    async fn random_photo_url(&self) -> Result<String, PhotoClientError> {
        Ok(self.0.to_string())
    }
}

struct FailingPhotoClient;

#[async_trait]
impl PhotoClient for FailingPhotoClient {
    async fn random_photo_url(&self) -> Result<String, PhotoClientError> {
        Err(PhotoClientError::CircuitOpen)
    }
}

async fn context_with(photo_client: Arc<dyn PhotoClient>) -> AppContext {
    let database = Database::in_memory().await.unwrap();
    let context = AppContext::new(database, photo_client);
    context.init().await.unwrap();
    context
}

macro_rules! init_app {
    ($context:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::from($context.user_service()))
                .configure(configure_all_routes),
        )
        .await
    };
}

fn new_user(username: &str) -> Value {
    json!({ "username": username, "email": format!("{}@example.com", username) })
}

#[actix_web::test]
async fn test_health_reports_up() {
    let context = context_with(Arc::new(NoOpPhotoClient)).await;
    let app = init_app!(context);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "status": "UP" }));
}

#[actix_web::test]
async fn test_create_then_get_user() {
    let context = context_with(Arc::new(StaticPhotoClient("https://random.dog/x.jpg"))).await;
    let app = init_app!(context);

    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(new_user("alice"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let created: Value = test::read_body_json(resp).await;
    assert!(created.get("errors").is_none());
    let user = &created["result"];
    let id = user["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(user["username"], "alice");
    assert_eq!(user["email"], "alice@example.com");
    assert_eq!(user["dog_photo_url"], "https://random.dog/x.jpg");
    assert!(user["created_at"].is_string());
    assert!(user["updated_at"].is_string());

    let req = test::TestRequest::get()
        .uri(&format!("/user/{}", id))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["result"]["id"], id);
    assert_eq!(fetched["result"]["created_at"], user["created_at"]);
}

#[actix_web::test]
async fn test_duplicate_email_is_conflict() {
    let context = context_with(Arc::new(NoOpPhotoClient)).await;
    let app = init_app!(context);

    for expected in [StatusCode::OK, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(new_user("alice"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);

        if expected == StatusCode::CONFLICT {
            let body: Value = test::read_body_json(resp).await;
            assert!(body.get("result").is_none());
            assert_eq!(body["errors"]["global"][0]["code"], "Constraint");
        }
    }
}

#[actix_web::test]
async fn test_unknown_user_is_not_found() {
    let context = context_with(Arc::new(NoOpPhotoClient)).await;
    let app = init_app!(context);

    let req = test::TestRequest::get().uri("/user/404").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "errors": { "global": [{ "code": "NotFound", "message": "resource not found" }] } })
    );
}

#[actix_web::test]
async fn test_invalid_email_is_field_validation_error() {
    let context = context_with(Arc::new(NoOpPhotoClient)).await;
    let app = init_app!(context);

    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(json!({ "username": "alice", "email": "nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["email"][0]["code"], "email");
    assert_eq!(
        body["errors"]["email"][0]["message"],
        "Validation for email failed on the 'email' tag"
    );
    assert!(body["errors"].get("username").is_none());
}

#[actix_web::test]
async fn test_binding_failures_are_bad_requests() {
    let context = context_with(Arc::new(NoOpPhotoClient)).await;
    let app = init_app!(context);

    let req = test::TestRequest::post()
        .uri("/user")
        .insert_header(ContentType::json())
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["global"][0]["code"], "InvalidRequest");

    let req = test::TestRequest::get().uri("/user/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["global"][0]["code"], "InvalidRequest");
}

#[actix_web::test]
async fn test_update_user_keeps_created_at() {
    let context = context_with(Arc::new(NoOpPhotoClient)).await;
    let app = init_app!(context);

    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(new_user("alice"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["result"]["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/user/{}", id))
        .set_json(json!({ "username": "alicia", "email": "alicia@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["result"]["id"], id);
    assert_eq!(updated["result"]["username"], "alicia");
    assert_eq!(updated["result"]["email"], "alicia@example.com");
    assert_eq!(updated["result"]["created_at"], created["result"]["created_at"]);

    let req = test::TestRequest::put()
        .uri("/user/999")
        .set_json(new_user("ghost"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_to_taken_email_is_conflict() {
    let context = context_with(Arc::new(NoOpPhotoClient)).await;
    let app = init_app!(context);

    let mut ids = Vec::new();
    for name in ["alice", "bob"] {
        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(new_user(name))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(created["result"]["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::put()
        .uri(&format!("/user/{}", ids[1]))
        .set_json(json!({ "username": "bob", "email": "alice@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("result").is_none());
    assert_eq!(body["errors"]["global"][0]["code"], "Constraint");
}

#[actix_web::test]
async fn test_delete_user_returns_empty_envelope() {
    let context = context_with(Arc::new(NoOpPhotoClient)).await;
    let app = init_app!(context);

    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(new_user("alice"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["result"]["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/user/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({}));

    let req = test::TestRequest::get()
        .uri(&format!("/user/{}", id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/user/{}", id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_search_users_by_ids() {
    let context = context_with(Arc::new(StaticPhotoClient("https://random.dog/y.png"))).await;
    let app = init_app!(context);

    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(new_user(name))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(created["result"]["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::post()
        .uri("/search-users")
        .set_json(json!({ "ids_in": [ids[2], ids[0]] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let found = body["result"].as_array().unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0]["id"], ids[0]);
    assert_eq!(found[1]["id"], ids[2]);
    assert!(found.iter().all(|u| u["dog_photo_url"] == "https://random.dog/y.png"));

    let req = test::TestRequest::post()
        .uri("/search-users")
        .set_json(json!({}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["result"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_photo_failure_is_unknown_server_error() {
    let context = context_with(Arc::new(FailingPhotoClient)).await;
    let app = init_app!(context);

    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(new_user("alice"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["global"][0]["code"], "unknown");
}
