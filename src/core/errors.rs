//! # Application Error Handling System
//!
//! 세션/인증 계층 전역에서 사용하는 에러 분류 체계입니다.
//! IdP(외부 인증 제공자)와 로컬 저장소에서 발생하는 제각각의 실패를
//! 호출자가 다룰 수 있는 소수의 의미있는 종류로 정규화합니다.
//!
//! ## 에러 전파 정책
//!
//! - **정상 흐름으로 취급**: `ValidationFailed`, `UserNotFound`, `InvalidCredentials`,
//!   `EmailAlreadyUsed`, `InvalidToken` 은 일반적인 결과로 반환되며 에러 로그를 남기지 않습니다.
//! - **감지 지점에서 한 번만 로그**: `UpstreamUnavailable`, `StorageUnavailable` 은
//!   실패한 연산 이름과 함께 발생 지점에서 기록한 뒤 일반 종류로만 전달됩니다.
//! - **수동 복구 필요**: `OrphanedIdentity` 는 IdP 가입은 성공했지만 로컬 저장이 실패한 경우로
//!   별도의 높은 심각도로 기록됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용자 노출 메시지 |
//! |----------|-------------|-------------------|
//! | `ValidationFailed` | 400 Bad Request | 필드별 메시지 |
//! | `InvalidCredentials` | 401 Unauthorized | 그대로 노출 |
//! | `InvalidToken` | 401 Unauthorized | 그대로 노출 |
//! | `UserNotFound` | 404 Not Found | 그대로 노출 |
//! | `EmailAlreadyUsed` | 409 Conflict | 그대로 노출 |
//! | `UpstreamUnavailable` | 503 Service Unavailable | 일반 재시도 안내 |
//! | `StorageUnavailable` | 503 Service Unavailable | 일반 재시도 안내 |
//! | `OrphanedIdentity` | 500 Internal Server Error | 일반 재시도 안내 |
//! | `Config`, `Internal` | 500 Internal Server Error | 일반 재시도 안내 |

use std::fmt;
use serde::Serialize;
use thiserror::Error;

/// 사용자에게 노출되는 일반 안내 문구
///
/// IdP나 저장소의 원본 에러 텍스트는 절대 응답에 포함하지 않습니다.
pub const GENERIC_FAILURE_MESSAGE: &str = "일시적인 오류가 발생했습니다. 잠시 후 다시 시도해주세요";

/// 자격 증명 검증 규칙 태그
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldRule {
    #[serde(rename = "required")]
    Required,
    #[serde(rename = "email-format")]
    EmailFormat,
    #[serde(rename = "min-length")]
    MinLength,
}

impl FieldRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldRule::Required => "required",
            FieldRule::EmailFormat => "email-format",
            FieldRule::MinLength => "min-length",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "required" => Some(FieldRule::Required),
            "email-format" => Some(FieldRule::EmailFormat),
            "min-length" => Some(FieldRule::MinLength),
            _ => None,
        }
    }
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 단일 필드 검증 위반
///
/// 표시용 문구는 포함하지 않습니다. 문구 조합은 프레젠테이션 계층의 몫입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: FieldRule,
}

impl FieldError {
    pub fn new(field: &'static str, rule: FieldRule) -> Self {
        Self { field, rule }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.rule)
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 서비스와 리포지토리 계층의 모든 연산은 `Result<T, AppError>` 를 반환합니다.
/// `UpstreamUnavailable` / `StorageUnavailable` 의 문자열은 실패한 연산의 이름으로,
/// 운영자용 로그 컨텍스트일 뿐 사용자 응답에는 노출되지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email is already used")]
    EmailAlreadyUsed,

    #[error("Validation failed: {}", join_fields(.0))]
    ValidationFailed(Vec<FieldError>),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid or expired access token")]
    InvalidToken,

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Orphaned upstream identity: {subject_id}")]
    OrphanedIdentity { subject_id: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    /// 응답 본문에 실리는 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::EmailAlreadyUsed => "email_already_used",
            AppError::ValidationFailed(_) => "validation_failed",
            AppError::UserNotFound => "user_not_found",
            AppError::InvalidToken => "invalid_token",
            AppError::UpstreamUnavailable(_) => "upstream_unavailable",
            AppError::StorageUnavailable(_) => "storage_unavailable",
            AppError::OrphanedIdentity { .. } => "registration_incomplete",
            AppError::Config(_) | AppError::Internal(_) => "internal_error",
        }
    }

    /// 사용자에게 보여줄 문구
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "잘못된 이메일 또는 비밀번호입니다",
            AppError::EmailAlreadyUsed => "이미 사용 중인 이메일입니다",
            AppError::ValidationFailed(_) => "입력값을 확인해주세요",
            AppError::UserNotFound => "사용자를 찾을 수 없습니다",
            AppError::InvalidToken => "유효하지 않거나 만료된 토큰입니다",
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::EmailAlreadyUsed => StatusCode::CONFLICT,
            AppError::UpstreamUnavailable(_) | AppError::StorageUnavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        use crate::domain::dto::users::response::FieldErrorResponse;

        let mut body = serde_json::json!({
            "error": self.code(),
            "message": self.user_message(),
        });

        if let AppError::ValidationFailed(fields) = self {
            let fields: Vec<FieldErrorResponse> = fields.iter().map(FieldErrorResponse::from).collect();
            body["fields"] = serde_json::json!(fields);
        }

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_failed_response() {
        let error = AppError::ValidationFailed(vec![FieldError::new("password", FieldRule::MinLength)]);
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_credentials_response() {
        let error = AppError::InvalidCredentials;
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_email_already_used_response() {
        let error = AppError::EmailAlreadyUsed;
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_user_not_found_response() {
        let error = AppError::UserNotFound;
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_and_storage_are_service_unavailable() {
        let upstream = AppError::UpstreamUnavailable("login".to_string());
        let storage = AppError::StorageUnavailable("add_user".to_string());

        assert_eq!(upstream.error_response().status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(storage.error_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_upstream_detail_is_not_exposed() {
        let error = AppError::UpstreamUnavailable("signup status 502: gateway exploded".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();

        assert!(!text.contains("gateway exploded"));
        assert!(text.contains("upstream_unavailable"));
    }

    #[actix_web::test]
    async fn test_validation_response_lists_fields() {
        let error = AppError::ValidationFailed(vec![
            FieldError::new("email", FieldRule::EmailFormat),
            FieldError::new("password", FieldRule::MinLength),
        ]);
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["fields"][0]["field"], "email");
        assert_eq!(json["fields"][0]["rule"], "email-format");
        assert_eq!(json["fields"][1]["rule"], "min-length");
    }

    #[test]
    fn test_field_rule_codes() {
        for rule in [FieldRule::Required, FieldRule::EmailFormat, FieldRule::MinLength] {
            assert_eq!(FieldRule::from_code(rule.as_str()), Some(rule));
        }
        assert_eq!(FieldRule::from_code("length"), None);
    }
}
