//! 사용자 엔티티
//!
//! `users` 컬렉션에 저장되는 문서의 형태를 정의합니다.
//! Mongoose의 `UserSchema`(`name: String`, `age: Number`)에 해당하며,
//! 식별자는 MongoDB가 자동 생성하는 ObjectId입니다.
//! `_id`, `name`, `age` 외의 필드는 어떤 경우에도 영속화되지 않습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use log::info;

/// 사용자 문서
///
/// 저장 전에는 `id`가 `None`이며, 삽입 시 드라이버가 반환한
/// `inserted_id`로 채워집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i32,
}

impl User {
    /// 아직 저장되지 않은 새 사용자 엔티티를 생성합니다 (ID는 자동 할당됨)
    pub fn new(name: String, age: i32) -> Self {
        Self {
            id: None,
            name,
            age,
        }
    }

    /// 저장 직전에 호출되는 pre-save 훅
    ///
    /// Mongoose의 `UserSchema.pre('save', ...)`에 해당합니다.
    /// 업무적 의미 없는 진단 로그 한 줄을 남기는 것이 전부입니다.
    pub fn pre_save(&self) {
        info!("Hello from pre save hook: saving user '{}'", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new("John Doe".to_string(), 30);

        assert!(user.id.is_none());
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.age, 30);
    }

    #[test]
    fn test_unsaved_user_serializes_without_id_field() {
        let user = User::new("John Doe".to_string(), 30);
        let doc = bson::to_document(&user).unwrap();

        // _id는 저장 전에는 문서에 포함되지 않음 (드라이버가 생성)
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("name").unwrap(), "John Doe");
        assert_eq!(doc.get_i32("age").unwrap(), 30);
    }

    #[test]
    fn test_persisted_document_shape() {
        let mut user = User::new("Jane".to_string(), 25);
        user.id = Some(ObjectId::new());

        let doc = bson::to_document(&user).unwrap();

        // 영속 문서는 _id, name, age 세 필드만 가짐
        assert_eq!(doc.len(), 3);
        assert!(doc.contains_key("_id"));
        assert!(doc.contains_key("name"));
        assert!(doc.contains_key("age"));
    }

    #[test]
    fn test_user_bson_roundtrip() {
        let mut user = User::new("Jane".to_string(), 25);
        user.id = Some(ObjectId::new());

        let doc = bson::to_document(&user).unwrap();
        let restored: User = bson::from_document(doc).unwrap();

        assert_eq!(restored.id, user.id);
        assert_eq!(restored.name, user.name);
        assert_eq!(restored.age, user.age);
    }
}
