//! # 인증 리포지토리
//!
//! [`AuthService`](crate::services::auth::AuthService) 가 의존하는 로그인/로그아웃/주체 확인 계약과
//! 호스팅 IdP 기반 구현입니다.

use async_trait::async_trait;
use crate::clients::IdentityProviderClient;
use crate::core::errors::AppResult;
use crate::domain::models::token::Token;

/// 세션 수명주기 계약
///
/// 구현체는 요청 사이에 변경 가능한 상태를 두지 않으며 여러 요청에서 동시에 호출됩니다.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// 이메일/비밀번호로 세션 토큰을 발급받습니다.
    async fn login(&self, email: &str, password: &str) -> AppResult<Token>;

    /// 액세스 토큰의 세션을 종료합니다.
    async fn logout(&self, access_token: &str) -> AppResult<()>;

    /// 액세스 토큰의 subject id 를 확인합니다.
    async fn resolve_identity(&self, access_token: &str) -> AppResult<String>;
}

/// [`IdentityProviderClient`] 로 위임하는 [`AuthRepository`] 구현
#[derive(Clone)]
pub struct IdpAuthRepository {
    client: IdentityProviderClient,
}

impl IdpAuthRepository {
    pub fn new(client: IdentityProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthRepository for IdpAuthRepository {
    async fn login(&self, email: &str, password: &str) -> AppResult<Token> {
        self.client.login(email, password).await
    }

    async fn logout(&self, access_token: &str) -> AppResult<()> {
        self.client.logout(access_token).await
    }

    async fn resolve_identity(&self, access_token: &str) -> AppResult<String> {
        self.client.resolve_identity(access_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use crate::config::IdentityProviderConfig;
    use crate::core::errors::AppError;

    fn repository_for(server: &MockServer) -> IdpAuthRepository {
        let client = IdentityProviderClient::new(&IdentityProviderConfig {
            api_key: "test-key".to_string(),
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        IdpAuthRepository::new(client)
    }

    #[tokio::test]
    async fn test_delegates_resolve_identity_to_idp() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("authorization", "Bearer access-abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "user-1" })))
            .expect(1)
            .mount(&server)
            .await;

        let subject = repository_for(&server).resolve_identity("access-abc").await.unwrap();
        assert_eq!(subject, "user-1");
    }

    #[tokio::test]
    async fn test_logout_twice_reports_second_failure_without_panicking() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/logout"))
            .respond_with(ResponseTemplate::new(204))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/logout"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let repository = repository_for(&server);

        assert!(repository.logout("access-abc").await.is_ok());
        assert!(matches!(
            repository.logout("access-abc").await,
            Err(AppError::UpstreamUnavailable(_))
        ));
    }
}
