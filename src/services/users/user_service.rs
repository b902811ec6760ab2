//! # 사용자 관리 서비스 구현
//!
//! 핸들러와 리포지토리 사이의 얇은 비즈니스 계층입니다.
//! NestJS의 `@Injectable() UsersService`에 해당하며, 자체 비즈니스 로직은
//! 없고 엔티티↔DTO 변환과 부재 신호의 404 매핑만 담당합니다.
//!
//! ## 싱글톤 패턴 및 의존성 주입
//!
//! `#[service]` 매크로를 통해 싱글톤으로 관리되며, NestJS의
//! `constructor(private usersService: UsersService)` 생성자 주입처럼
//! `UserRepository`가 자동으로 주입됩니다:
//!
//! ```rust,ignore
//! let user_service = UserService::instance(); // 항상 동일한 인스턴스
//! ```

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    domain::{
        entities::users::user::User,
        dto::users::{
            request::CreateUserRequest,
            response::UserResponse,
        },
    },
    repositories::users::user_repo::UserRepository,
    core::errors::AppError,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 각 호출은 상태 없는 요청/응답이며, 핸들러는 어떤 상태도 보존하지 않습니다.
#[service(name = "user")]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 사용자 계정 생성
    ///
    /// 요청 DTO를 엔티티로 변환해 저장하고, 생성된 식별자가 포함된
    /// 레코드를 그대로 반환합니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        let user = User::from(request);

        let created_user = self.user_repo.create(user).await?;

        Ok(UserResponse::from(created_user))
    }

    /// 전체 사용자 목록 조회
    ///
    /// 저장소가 반환하는 순서 그대로, 페이징 없이 반환합니다.
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자 조회
    ///
    /// 리포지토리의 부재 신호(`None`)는 HTTP 표면을 위해 404로 매핑됩니다.
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 삭제
    ///
    /// 제거된 레코드를 반환합니다. 대상이 없으면 404로 매핑됩니다.
    pub async fn delete_user(&self, id: &str) -> Result<UserResponse, AppError> {
        let deleted = self.user_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(deleted))
    }
}
