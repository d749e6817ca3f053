//! # 사용자 리포지토리
//!
//! [`UserService`](crate::services::users::UserService) 가 의존하는 가입/조회 계약입니다.
//! 가입은 IdP 로, 프로필 저장과 조회는 [`UserStore`] 로 위임합니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::clients::IdentityProviderClient;
use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::Token;
use super::user_store::UserStore;

/// 가입 및 로컬 프로필 계약
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// IdP 에 가입하고 세션 토큰을 받습니다.
    async fn register(&self, email: &str, password: &str) -> AppResult<Token>;

    /// 로컬 프로필을 저장합니다.
    async fn add_user(&self, user: &User) -> AppResult<()>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;
}

/// IdP 클라이언트 + 로컬 저장소 조합 구현
#[derive(Clone)]
pub struct IdpUserRepository {
    client: IdentityProviderClient,
    store: Arc<dyn UserStore>,
}

impl IdpUserRepository {
    pub fn new(client: IdentityProviderClient, store: Arc<dyn UserStore>) -> Self {
        Self { client, store }
    }
}

#[async_trait]
impl UserRepository for IdpUserRepository {
    async fn register(&self, email: &str, password: &str) -> AppResult<Token> {
        self.client.register(email, password).await
    }

    async fn add_user(&self, user: &User) -> AppResult<()> {
        self.store.add(user).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.store.find_by_email(email).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.store.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use crate::config::IdentityProviderConfig;
    use crate::core::errors::AppError;
    use crate::repositories::users::InMemoryUserStore;

    fn repository_for(server: &MockServer, store: Arc<InMemoryUserStore>) -> IdpUserRepository {
        let client = IdentityProviderClient::new(&IdentityProviderConfig {
            api_key: "test-key".to_string(),
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        IdpUserRepository::new(client, store)
    }

    #[tokio::test]
    async fn test_register_goes_to_idp_and_store_is_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/signup"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(InMemoryUserStore::new());
        let repository = repository_for(&server, store.clone());

        let result = repository.register("alice@example.com", "Secr3t!").await;

        assert!(matches!(result, Err(AppError::EmailAlreadyUsed)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_profile_operations_use_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let store = Arc::new(InMemoryUserStore::new());
        let repository = repository_for(&server, store.clone());

        repository.add_user(&User::new("sub-1", "alice@example.com", "Alice")).await.unwrap();

        assert_eq!(repository.find_by_id("sub-1").await.unwrap().unwrap().email, "alice@example.com");
        assert_eq!(repository.find_by_email("alice@example.com").await.unwrap().unwrap().id, "sub-1");
        assert_eq!(store.len(), 1);
    }
}
