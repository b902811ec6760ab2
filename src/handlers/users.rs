//! # User Management HTTP Handlers
//!
//! 사용자 리소스의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 각 핸들러는 비즈니스 로직 없이 두 개의 영속 연산(생성, 목록)과
//! 보조 연산(단건 조회, 삭제)에 요청을 매핑합니다.
//!
//! ## 구현된 엔드포인트
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users` | 전체 사용자 목록 | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 단건 조회 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 200 OK |

use actix_web::{web, HttpResponse, get, post, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::services::users::user_service::UserService;

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "John Doe",
///   "age": 30
/// }
/// ```
///
/// 정의되지 않은 키가 함께 와도 무시되며 영속화되지 않습니다.
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": "507f1f77bcf86cd799439011",
///   "name": "John Doe",
///   "age": 30
/// }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "error": "Validation error: ..."
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"name": "John Doe", "age": 30}'
/// ```
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users`
///
/// 저장 엔진이 반환하는 삽입 순서 그대로 전체 레코드를 반환합니다.
/// 페이징과 필터링은 없으며, 비어 있으면 빈 배열을 반환합니다.
///
/// # 응답 (200 OK)
///
/// ```json
/// [
///   { "id": "507f1f77bcf86cd799439011", "name": "John Doe", "age": 30 }
/// ]
/// ```
#[get("")]
pub async fn list_users() -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 단건 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// # 경로 파라미터
///
/// - `user_id`: 조회할 사용자의 고유 ID (MongoDB ObjectId)
///
/// # 응답
///
/// * `200 OK` - 사용자 정보
/// * `400 Bad Request` - 잘못된 ObjectId 형식
/// * `404 Not Found` - 해당 ID의 사용자 없음
#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /users/{user_id}`
///
/// 물리적 삭제(Hard Delete)이며 복구가 불가능합니다.
/// 제거된 레코드를 응답 본문으로 반환합니다.
///
/// # 응답
///
/// * `200 OK` - 제거된 사용자 정보
/// * `404 Not Found` - 삭제할 사용자 없음
#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let deleted = service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(deleted))
}
