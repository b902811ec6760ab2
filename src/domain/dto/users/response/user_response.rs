//! 사용자 응답 DTO
//!
//! 엔티티를 클라이언트에 노출하는 형태로 변환합니다.
//! ObjectId는 24자리 16진수 문자열로 직렬화됩니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub age: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, name, age } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_from_user_maps_object_id_to_hex() {
        let object_id = ObjectId::new();
        let mut user = User::new("John Doe".to_string(), 30);
        user.id = Some(object_id);

        let response = UserResponse::from(user);

        assert_eq!(response.id, object_id.to_hex());
        assert_eq!(response.name, "John Doe");
        assert_eq!(response.age, 30);
    }

    #[test]
    fn test_from_unsaved_user_yields_empty_id() {
        let user = User::new("Jane".to_string(), 25);

        let response = UserResponse::from(user);

        assert!(response.id.is_empty());
    }

    #[test]
    fn test_response_json_shape() {
        let mut user = User::new("Jane".to_string(), 25);
        user.id = Some(ObjectId::new());

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("name"));
        assert!(object.contains_key("age"));
    }
}
