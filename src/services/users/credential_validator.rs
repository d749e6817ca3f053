//! 자격 증명 구조 검증
//!
//! 규칙 자체는 [`Credentials`] 의 `validator` 속성에 선언되어 있고,
//! 이 모듈은 결과를 표시 문구 없는 [`FieldError`] 목록으로 바꿉니다.

use validator::Validate;
use crate::core::errors::{FieldError, FieldRule};
use crate::domain::dto::users::request::Credentials;

/// 보고 순서가 고정된 검증 대상 필드
const FIELD_ORDER: [&str; 3] = ["email", "name", "password"];

/// 모든 규칙을 검사해 위반 목록을 반환합니다.
///
/// 필드 사이에는 단락 평가하지 않으므로 한 번에 모든 위반이 보고됩니다.
/// 위반이 없으면 빈 `Vec` 을 반환하며, 이것이 유일한 "유효" 신호입니다.
pub fn validate_credentials(credentials: &Credentials) -> Vec<FieldError> {
    let errors = match credentials.validate() {
        Ok(()) => return Vec::new(),
        Err(errors) => errors,
    };

    let field_errors = errors.field_errors();

    FIELD_ORDER
        .into_iter()
        .filter_map(|field| {
            let first = field_errors.get(field)?.first()?;
            let rule = FieldRule::from_code(&first.code).unwrap_or(FieldRule::Required);
            Some(FieldError::new(field, rule))
        })
        .collect()
}
