//! # 사용자 관리 서비스
//!
//! 가입 오케스트레이션과 로컬 프로필 조회를 담당합니다.
//!
//! ## 가입 단계
//!
//! ```text
//! Received → Validated → Signed-up-upstream → Persisted-locally → Complete
//! ```
//!
//! | 단계 | 실패 시 결과 | 비고 |
//! |------|-------------|------|
//! | Validated | `ValidationFailed(fields)` | IdP 를 호출하지 않음 |
//! | Signed-up-upstream | `EmailAlreadyUsed` / `UpstreamUnavailable` | 로컬 레코드 생성 안 함 |
//! | Persisted-locally | `OrphanedIdentity` | `ORPHANED_IDENTITY` 로 기록, 수동 정리 필요 |
//!
//! 어떤 단계도 자동으로 재시도하지 않습니다.
//! IdP 에 보상(삭제) API 가 보장되지 않으므로 로컬 저장 실패 시 IdP 가입을 되돌리지 않습니다.

use std::sync::Arc;
use crate::core::errors::{AppError, AppResult, FieldError};
use crate::domain::dto::users::request::{normalize_email, Credentials};
use crate::domain::entities::users::user::User;
use crate::domain::models::token::Token;
use crate::repositories::UserRepository;
use super::credential_validator::validate_credentials;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// 회원가입
    ///
    /// 이메일과 이름은 앞뒤 공백을 제거한 뒤 검증하고 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationFailed` - 하나 이상의 필드 규칙 위반 (IdP 호출 없음)
    /// * `AppError::EmailAlreadyUsed` - IdP 가 중복 이메일로 거절
    /// * `AppError::UpstreamUnavailable` - IdP 호출 실패
    /// * `AppError::OrphanedIdentity` - IdP 가입은 성공했으나 로컬 저장 실패
    pub async fn register(&self, credentials: &Credentials) -> AppResult<Token> {
        let credentials = credentials.normalized();

        let violations = validate_credentials(&credentials);
        if !violations.is_empty() {
            log::debug!("가입 입력 검증 실패: {} 건", violations.len());
            return Err(AppError::ValidationFailed(violations));
        }

        let token = self
            .repository
            .register(&credentials.email, &credentials.password)
            .await?;

        let user = User::new(token.subject_id.clone(), credentials.email, credentials.name);

        if let Err(e) = self.repository.add_user(&user).await {
            log::error!(
                "ORPHANED_IDENTITY subject_id={} email={} cause={}",
                user.id,
                user.email,
                e
            );
            return Err(AppError::OrphanedIdentity { subject_id: user.id });
        }

        log::info!("✅ 회원가입 완료: {}", user.id);
        Ok(token)
    }

    /// 가입 없이 자격 증명만 검증합니다. 위반이 없으면 빈 `Vec` 입니다.
    pub fn validate_credentials(&self, credentials: &Credentials) -> Vec<FieldError> {
        validate_credentials(&credentials.normalized())
    }

    /// # Errors
    ///
    /// * `AppError::UserNotFound` - 레코드 없음
    /// * `AppError::StorageUnavailable` - 저장소 실패
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.repository
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AppError::UserNotFound)
    }

    /// # Errors
    ///
    /// * `AppError::UserNotFound` - 레코드 없음
    /// * `AppError::StorageUnavailable` - 저장소 실패
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}
