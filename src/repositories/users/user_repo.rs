//! 사용자 저장소
//!
//! 비즈니스 파라미터를 SQL 호출로 옮기고, 조회한 행을 [`User`] 모델로 되돌려 줍니다.
//! 에러 분류(`NotFound`, `ConflictError`, `DatabaseError`)는 이 계층에서 결정됩니다.

use chrono::Utc;
use log::debug;
use sqlx::sqlite::SqlitePool;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::Database;
use crate::domain::entities::users::user::UserRecord;
use crate::domain::models::{CreateUserParams, FindAllFilter, UpdateUserParams, User};

const USER_COLUMNS: &str = "id, username, email, created_at, updated_at";

#[derive(Clone)]
pub struct UserRepository {
    database: Database,
}

impl UserRepository {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    fn pool(&self) -> &SqlitePool {
        self.database.pool()
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {} FROM users WHERE id = ?",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;

        Ok(record.into())
    }

    /// 사용자 목록을 ID 오름차순으로 조회합니다.
    ///
    /// 필터가 없으면 전체를, 있으면 `ids_in`에 포함된 사용자만 돌려줍니다.
    /// ID 목록은 JSON 배열 하나로 바인딩하므로 SQLite 변수 개수 제한을 받지 않습니다.
    pub async fn find_all_by_filter(&self, filter: Option<&FindAllFilter>) -> AppResult<Vec<User>> {
        let records = match filter {
            None => {
                sqlx::query_as::<_, UserRecord>(&format!(
                    "SELECT {} FROM users ORDER BY id",
                    USER_COLUMNS
                ))
                .fetch_all(self.pool())
                .await?
            }
            Some(filter) if filter.ids_in.is_empty() => return Ok(Vec::new()),
            Some(filter) => {
                let ids = serde_json::to_string(&filter.ids_in).context("ID 목록 직렬화 실패")?;

                sqlx::query_as::<_, UserRecord>(&format!(
                    "SELECT {} FROM users WHERE id IN (SELECT value FROM json_each(?)) ORDER BY id",
                    USER_COLUMNS
                ))
                .bind(ids)
                .fetch_all(self.pool())
                .await?
            }
        };

        debug!("사용자 {}명 조회", records.len());
        Ok(records.into_iter().map(User::from).collect())
    }

    pub async fn create(&self, params: &CreateUserParams) -> AppResult<User> {
        let now = Utc::now();

        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "INSERT INTO users (username, email, created_at, updated_at) \
             VALUES (?, ?, ?, ?) RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&params.username)
        .bind(&params.email)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool())
        .await?;

        Ok(record.into())
    }

    /// 사용자명과 이메일만 갱신하고 `updated_at`을 현재 시각으로 바꿉니다.
    pub async fn update(&self, params: &UpdateUserParams) -> AppResult<User> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "UPDATE users SET username = ?, email = ?, updated_at = ? \
             WHERE id = ? RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&params.username)
        .bind(&params.email)
        .bind(Utc::now())
        .bind(params.id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", params.id)))?;

        Ok(record.into())
    }

    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("user {}", id)));
        }

        Ok(())
    }

    /// 모든 사용자를 삭제하고 삭제된 행 수를 돌려줍니다. 테스트/초기화 전용입니다.
    pub async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM users")
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected())
    }
}
