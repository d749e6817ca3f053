//! 가입 전 입력 확인
//!
//! 폼 입력 중 점진적으로 피드백을 주기 위한 엔드포인트입니다.
//! 가입을 시도하지 않으며 IdP 를 호출하지 않습니다.
use std::collections::BTreeMap;
use actix_web::{post, web, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::dto::users::request::Credentials;
use crate::domain::dto::users::response::{FieldErrorResponse, ValidateCredentialsResponse};
use crate::services::users::UserService;

const EMAIL_ALREADY_USED_MESSAGE: &str = "이미 사용 중인 이메일입니다";

/// 가입 입력 확인 핸들러
///
/// 1. 필드 규칙 검증
/// 2. 이메일이 형식상 올바르면 로컬 프로필 중복 확인 (`UserNotFound` 가 정상 분기)
///
/// # Endpoint
/// `POST /validate-register`
///
/// # Responses
/// * `200` - `errors` 와 `are_values_valid`
/// * `503` - 저장소 조회 실패
#[post("/validate-register")]
pub async fn validate_register(
    user_service: web::Data<UserService>,
    form: web::Form<Credentials>,
) -> Result<HttpResponse, AppError> {
    let credentials = form.into_inner().normalized();

    let mut errors: BTreeMap<&'static str, String> = user_service
        .validate_credentials(&credentials)
        .iter()
        .map(|violation| (violation.field, FieldErrorResponse::from(violation).message.to_string()))
        .collect();

    if !errors.contains_key("email") {
        match user_service.get_user_by_email(&credentials.email).await {
            Ok(_) => {
                errors.insert("email", EMAIL_ALREADY_USED_MESSAGE.to_string());
            }
            Err(AppError::UserNotFound) => {}
            Err(e) => return Err(e),
        }
    }

    let are_values_valid = errors.is_empty();

    Ok(HttpResponse::Ok().json(ValidateCredentialsResponse {
        email: credentials.email,
        name: credentials.name,
        errors,
        are_values_valid,
    }))
}
