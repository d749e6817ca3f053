use std::collections::BTreeMap;
use serde::Serialize;
use crate::core::errors::{FieldError, FieldRule};
use crate::domain::entities::users::user::User;
use crate::domain::models::token::Token;

/// 사용자 프로필 응답
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, email, name } = user;
        Self { id, email, name }
    }
}

/// 로그인/회원가입 성공 응답
///
/// 토큰 값 자체는 HttpOnly 쿠키로만 전달하고 본문에는 싣지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user_id: String,
    pub expires_in: i64,
    pub expires_at: i64,
    pub message: String,
}

impl SessionResponse {
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        Self {
            user_id: token.subject_id.clone(),
            expires_in: token.expires_in,
            expires_at: token.expires_at,
            message: message.into(),
        }
    }
}

/// 필드 검증 위반 + 표시 문구
#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorResponse {
    pub field: &'static str,
    pub rule: FieldRule,
    pub message: &'static str,
}

impl From<&FieldError> for FieldErrorResponse {
    fn from(error: &FieldError) -> Self {
        let message = match (error.field, error.rule) {
            ("email", FieldRule::Required) => "이메일을 입력해주세요",
            ("email", _) => "유효한 이메일 주소를 입력해주세요",
            ("name", _) => "이름을 입력해주세요",
            ("password", FieldRule::MinLength) => "비밀번호는 최소 6자 이상이어야 합니다",
            ("password", _) => "비밀번호를 입력해주세요",
            (_, FieldRule::Required) => "필수 항목입니다",
            _ => "입력값을 확인해주세요",
        };

        Self {
            field: error.field,
            rule: error.rule,
            message,
        }
    }
}

/// 회원가입 사전 검증 응답
///
/// `errors` 는 필드명 → 표시 문구입니다. 비어 있으면 제출 가능한 상태입니다.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateCredentialsResponse {
    pub email: String,
    pub name: String,
    pub errors: BTreeMap<&'static str, String>,
    pub are_values_valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_messages() {
        let short = FieldErrorResponse::from(&FieldError::new("password", FieldRule::MinLength));
        let bad_email = FieldErrorResponse::from(&FieldError::new("email", FieldRule::EmailFormat));
        let no_name = FieldErrorResponse::from(&FieldError::new("name", FieldRule::Required));

        assert_eq!(short.message, "비밀번호는 최소 6자 이상이어야 합니다");
        assert_eq!(bad_email.message, "유효한 이메일 주소를 입력해주세요");
        assert_eq!(no_name.message, "이름을 입력해주세요");
    }

    #[test]
    fn test_session_response_carries_no_token_values() {
        let token = Token {
            subject_id: "sub-1".to_string(),
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: 3600,
            expires_at: 1_700_000_000,
        };

        let json = serde_json::to_string(&SessionResponse::new(&token, "ok")).unwrap();
        assert!(json.contains("sub-1"));
        assert!(!json.contains("\"access\""));
        assert!(!json.contains("\"refresh\""));
    }
}
