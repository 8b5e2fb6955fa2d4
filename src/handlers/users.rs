//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트입니다. 모든 응답은 `{result?, errors?}` 봉투로 감싸며,
//! 에러는 [`AppError`]의 `ResponseError` 구현이 상태 코드와 본문을 결정합니다.
//!
//! | 메서드 | 경로 | 설명 | 성공 응답 |
//! |--------|------|------|-----------|
//! | `GET` | `/user/{id}` | 사용자 조회 | `{"result": User}` |
//! | `POST` | `/user` | 사용자 생성 | `{"result": User}` |
//! | `PUT` | `/user/{id}` | 사용자 수정 | `{"result": User}` |
//! | `DELETE` | `/user/{id}` | 사용자 삭제 | `{}` |
//! | `POST` | `/search-users` | ID 목록으로 검색 | `{"result": [User]}` |
//!
//! 핸들러는 `web::Data<UserService>`로 서비스를 주입받습니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/user \
//!   -H "Content-Type: application/json" \
//!   -d '{"username":"alice","email":"alice@example.com"}'
//!
//! curl -X POST http://localhost:8080/search-users \
//!   -H "Content-Type: application/json" \
//!   -d '{"ids_in":[1,2]}'
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::envelope::ApiResponse;
use crate::domain::dto::users::request::{CreateUserRequest, SearchUsersRequest, UpdateUserRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::CreateUserParams;
use crate::services::users::UserService;

#[get("/user/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user))))
}

#[post("/user")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let params = CreateUserParams::from(payload.into_inner());
    let user = service.create_user(&params).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user))))
}

#[put("/user/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let params = payload.into_inner().into_params(id.into_inner());
    let user = service.update_user(&params).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user))))
}

#[delete("/user/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_user_by_id(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::empty()))
}

#[post("/search-users")]
pub async fn search_users(
    service: web::Data<UserService>,
    payload: web::Json<SearchUsersRequest>,
) -> Result<HttpResponse, AppError> {
    let filter = payload.into_inner().into_filter();
    let users = service.find_all_users_by_filter(filter.as_ref()).await?;

    let users = users.into_iter().map(UserResponse::from).collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(ApiResponse::success(users)))
}
