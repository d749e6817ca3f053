//! # 등록 자격 증명 DTO
//!
//! 회원가입 폼에서 받은 `email`, `password`, `name` 입니다.
//! 일시적인 입력값이며 그대로 저장하지 않습니다. 비밀번호는 IdP 로만 전달됩니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 태그 |
//! |------|------|------|
//! | `email` | 필수 | `required` |
//! | `email` | 이메일 형식 | `email-format` |
//! | `name` | 공백 제거 후 필수 | `required` |
//! | `password` | 필수 | `required` |
//! | `password` | 최소 6자 | `min-length` |
//!
//! 필드마다 처음 실패한 규칙 하나만 보고하고, 필드 사이에는 단락 평가하지 않습니다.
//! 실제 위반 목록 변환은 [`credential_validator`](crate::services::users::credential_validator) 가 담당합니다.

use std::fmt;
use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

/// 비밀번호 최소 길이 (문자 수)
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// 이메일 정규화: 앞뒤 공백 제거 후 소문자
///
/// IdP 는 이메일을 대소문자 구분 없이 다루므로 로컬 조회와 캐시 키도 같은 형태를 씁니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Clone, Default, Deserialize, Validate)]
pub struct Credentials {
    #[serde(default)]
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_password_field"))]
    pub password: String,

    #[serde(default)]
    #[validate(custom(function = "validate_name_field"))]
    pub name: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    /// 이메일은 [`normalize_email`], 이름은 앞뒤 공백만 제거한 사본
    ///
    /// 비밀번호는 사용자가 입력한 그대로 유지합니다.
    pub fn normalized(&self) -> Self {
        Self {
            email: normalize_email(&self.email),
            password: self.password.clone(),
            name: self.name.trim().to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .field("name", &self.name)
            .finish()
    }
}

fn validate_email_field(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::new("required"));
    }
    if !email.validate_email() {
        return Err(ValidationError::new("email-format"));
    }
    Ok(())
}

fn validate_password_field(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::new("required"));
    }
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(ValidationError::new("min-length"));
    }
    Ok(())
}

fn validate_name_field(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
