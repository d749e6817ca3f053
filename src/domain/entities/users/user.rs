//! # 사용자 엔티티
//!
//! 로컬 사용자 프로필 레코드입니다. `id` 는 로컬에서 생성하지 않고
//! IdP 가 발급한 subject id 를 그대로 사용합니다.
//!
//! 레코드는 IdP 가입이 성공하고 로컬 저장까지 완료된 경우에만 존재하며,
//! 생성 이후에는 변경되지 않습니다.

use serde::{Deserialize, Serialize};

/// 로컬 사용자 프로필
///
/// MongoDB 에서는 `_id` 필드에 subject id 가 저장됩니다.
/// 비밀번호는 IdP 로만 전달되며 이 레코드에는 절대 포함되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_id_is_stored_as_document_id() {
        let user = User::new("8f0c2b1e", "alice@example.com", "Alice");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["_id"], "8f0c2b1e");
        assert!(json.get("id").is_none());
        assert!(json.get("password").is_none());
    }
}
