//! # Domain Entities Module
//!
//! 데이터베이스 테이블과 1:1로 대응하는 행 구조체입니다.
//! `sqlx::FromRow`로 조회 결과에서 바로 만들어지며, 저장소 밖으로 나갈 때는
//! [`crate::domain::models`]의 비즈니스 모델로 변환됩니다.
//!
//! | 테이블 | 엔티티 |
//! |--------|--------|
//! | `users` | [`users::user::UserRecord`] |

pub mod users;
