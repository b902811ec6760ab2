//! 사용자 생성 요청 DTO
//!
//! NestJS의 `CreateUserDto`(`@IsString() name`, `@IsInt() age`)에 해당합니다.
//! 형태 검증만 수행하며 범위 검사나 유니크 제약은 없습니다.
//! 정의되지 않은 키는 역직렬화 단계에서 무시되므로, 요청에 어떤 추가
//! 필드가 오더라도 `name`/`age` 외에는 영속화되지 않습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::users::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "이름은 비어 있을 수 없습니다"))]
    pub name: String,
    pub age: i32,
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        User::new(request.name, request.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes_validation() {
        let request = CreateUserRequest {
            name: "John Doe".to_string(),
            age: 30,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let request = CreateUserRequest {
            name: "".to_string(),
            age: 30,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_extra_json_keys_are_ignored() {
        // 정의되지 않은 필드는 역직렬화에서 버려지므로 영속화될 수 없음
        let json = r#"{"name": "John Doe", "age": 30, "role": "admin", "email": "x@y.z"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name, "John Doe");
        assert_eq!(request.age, 30);
    }

    #[test]
    fn test_non_integer_age_is_rejected() {
        let json = r#"{"name": "John Doe", "age": "thirty"}"#;
        let result: Result<CreateUserRequest, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"name": "John Doe"}"#;
        let result: Result<CreateUserRequest, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_conversion_to_entity_keeps_fields() {
        let request = CreateUserRequest {
            name: "John Doe".to_string(),
            age: 30,
        };

        let user = User::from(request);

        assert!(user.id.is_none());
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.age, 30);
    }
}
