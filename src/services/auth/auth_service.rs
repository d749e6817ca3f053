//! # 세션 수명주기 서비스
//!
//! 로그인, 로그아웃, 액세스 토큰 주체 확인을 [`AuthRepository`] 로 위임하는 파사드입니다.
//! 데이터를 소유하지 않으며 로컬 상태를 변경하지 않습니다.
//!
//! ## 호출자 계약
//!
//! - `login` 의 `InvalidCredentials` 는 사용자에게 그대로 보여줄 수 있는 결과입니다.
//!   그 외 실패는 모두 `UpstreamUnavailable` 입니다.
//! - `logout` 실패는 로컬 세션 정리를 막지 않습니다. 같은 토큰으로 여러 번 호출해도 됩니다.
//! - `authenticate` 는 어떤 실패든 "인증되지 않음"(`None`)으로 바꿉니다.

use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::normalize_email;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::Token;
use crate::repositories::AuthRepository;

pub struct AuthService {
    repository: Arc<dyn AuthRepository>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn AuthRepository>) -> Self {
        Self { repository }
    }

    /// 이메일/비밀번호로 로그인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - 잘못된 이메일/비밀번호 조합
    /// * `AppError::UpstreamUnavailable` - 네트워크, 응답 형식, 예상하지 못한 상태 코드
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Token> {
        let token = self.repository.login(&normalize_email(email), password).await?;
        log::info!("로그인 성공: {}", token.subject_id);
        Ok(token)
    }

    /// IdP 세션을 종료합니다.
    ///
    /// 실패는 그대로 반환하지만 호출자는 결과와 무관하게 로컬 세션을 정리해야 합니다.
    pub async fn logout(&self, access_token: &str) -> AppResult<()> {
        self.repository.logout(access_token).await
    }

    /// 액세스 토큰의 subject id 를 확인합니다.
    ///
    /// 결과를 캐싱하지 않으므로 만료/폐기된 토큰은 항상 실패합니다.
    pub async fn resolve_identity(&self, access_token: &str) -> AppResult<String> {
        self.repository.resolve_identity(access_token).await
    }

    /// 요청 경계에서 쓰는 인증 판정
    ///
    /// 토큰이 없거나, 만료되었거나, IdP 호출이 실패하면 `None` 입니다.
    /// 에러를 호출자에게 전파하지 않습니다.
    pub async fn authenticate(&self, access_token: Option<&str>) -> Option<AuthenticatedUser> {
        let access_token = access_token.filter(|t| !t.is_empty())?;

        match self.resolve_identity(access_token).await {
            Ok(subject_id) => Some(AuthenticatedUser::new(subject_id)),
            Err(AppError::InvalidToken) => {
                log::debug!("만료되었거나 유효하지 않은 액세스 토큰");
                None
            }
            Err(e) => {
                // 감지 지점에서 이미 기록됨
                log::debug!("주체 확인 실패로 미인증 처리: {}", e);
                None
            }
        }
    }
}
