//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다. 하나의 명명된 연결에
//! 바인딩된 `users` 컬렉션을 감싸며, 각 연산은 드라이버 호출로의
//! 단순 패스스루입니다. Mongoose 모델(`this.userModel.create(...)`,
//! `this.userModel.find()`)을 주입받아 쓰는 NestJS 서비스와 동일한
//! 위치의 계층입니다.
//!
//! ## 특징
//!
//! - **자동 의존성 주입**: 싱글톤 매크로를 통해 `Database`가 주입됨
//! - **부재 신호**: 조회/삭제 대상이 없으면 에러가 아닌 `Ok(None)` 반환
//! - **실패 전파**: 재시도/타임아웃/트랜잭션 없음, 드라이버 장애는
//!   `AppError::DatabaseError`로 그대로 전파
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let repo = UserRepository::instance();
//!
//! let created = repo.create(User::new("John Doe".to_string(), 30)).await?;
//! let all = repo.find_all().await?;
//! let found = repo.find_by_id(&created.id.unwrap().to_hex()).await?;
//! ```

use std::sync::Arc;
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use crate::{
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::User,
};
use singleton_macro::repository;
use crate::core::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
///
/// `users` 컬렉션에 대한 생성/전체 조회/단건 조회/삭제 연산을 제공합니다.
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    ///
    /// 자동 주입되는 데이터베이스 컴포넌트입니다.
    /// `users` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
    db: Arc<Database>,
}

impl UserRepository {
    /// 새 사용자 생성
    ///
    /// 저장 직전에 pre-save 훅(진단 로그)을 실행한 뒤 문서를 삽입하고,
    /// 드라이버가 생성한 ObjectId를 채워 저장된 엔티티를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        // 쓰기 직전의 사이드이펙트 훅, 업무적 의미 없음
        user.pre_save();

        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = Some(
            result.inserted_id
                .as_object_id()
                .ok_or_else(|| AppError::InternalError("삽입 결과에 ObjectId가 없습니다".to_string()))?,
        );

        Ok(user)
    }

    /// 컬렉션의 모든 사용자 조회
    ///
    /// 페이징/필터링/정렬 없이 저장 엔진이 반환하는 순서 그대로
    /// 전체 레코드를 반환합니다.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection::<User>()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우 (에러 아님)
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자 삭제
    ///
    /// 해당 ID의 문서를 제거하고 제거된 문서를 반환합니다.
    /// 대상이 존재하지 않으면 `Ok(None)`을 반환합니다 (에러 아님).
    pub async fn delete(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<User>()
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
