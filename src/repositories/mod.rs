//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 백엔드가 아닌 트레이트에만 의존합니다.
//! 운영 환경에서는 IdP 클라이언트와 MongoDB 저장소를 조합하고,
//! 테스트에서는 호출을 기록하는 가짜 구현을 주입합니다.
//!
//! - [`auth`] - 로그인/로그아웃/토큰 주체 확인 ([`AuthRepository`])
//! - [`users`] - 가입과 로컬 프로필 저장/조회 ([`UserRepository`], [`UserStore`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{IdpAuthRepository, IdpUserRepository, InMemoryUserStore};
//!
//! let auth_repo = Arc::new(IdpAuthRepository::new(client.clone()));
//! let user_repo = Arc::new(IdpUserRepository::new(client, Arc::new(InMemoryUserStore::new())));
//! ```

pub mod auth;
pub mod users;

pub use auth::{AuthRepository, IdpAuthRepository};
pub use users::{IdpUserRepository, InMemoryUserStore, MongoUserStore, UserRepository, UserStore};
