//! # Application Error Handling System
//!
//! 서비스 전역에서 사용하는 통합 에러 타입을 정의합니다.
//! NestJS의 `HttpException` 계층(`BadRequestException`, `NotFoundException` 등)을
//! Rust의 타입 시스템으로 옮긴 것으로, `thiserror`로 `Error` trait을 구현하고
//! `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | DTO 검증 실패, 잘못된 ObjectId 형식 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자 조회/삭제 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 드라이버 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! // 리포지토리에서 드라이버 에러 변환
//! self.collection::<User>()
//!     .find_one(doc! { "_id": object_id })
//!     .await
//!     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!
//! // 핸들러에서 ? 연산자로 자동 HTTP 응답 변환
//! async fn get_user(user_id: web::Path<String>) -> Result<HttpResponse, AppError> {
//!     let user = UserService::instance().get_user_by_id(&user_id).await?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 이 서비스에서 발생할 수 있는 에러를 포괄하는 열거형입니다.
/// 재시도, 타임아웃, 복구 계층은 두지 않으며 데이터베이스 계층의
/// 장애는 메시지 그대로 호출자에게 전파됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연산 중 발생한 오류 (연결 실패, 쿼리 오류 등)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 실패 (DTO 검증, ObjectId 형식 오류)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청된 리소스가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 예상하지 못한 시스템 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("name is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display_includes_message() {
        let error = AppError::NotFound("사용자를 찾을 수 없습니다".to_string());
        assert!(error.to_string().contains("사용자를 찾을 수 없습니다"));
    }
}
