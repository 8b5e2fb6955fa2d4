//! 사용자 검색 요청 DTO

use serde::Deserialize;

use crate::domain::models::FindAllFilter;

/// `POST /search-users` 본문
///
/// `ids_in`을 생략하면 필터 없이 전체 사용자를 조회합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchUsersRequest {
    #[serde(default)]
    pub ids_in: Option<Vec<i64>>,
}

impl SearchUsersRequest {
    pub fn into_filter(self) -> Option<FindAllFilter> {
        self.ids_in.map(|ids_in| FindAllFilter { ids_in })
    }
}
