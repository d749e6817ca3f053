//! 세션 인증 서비스 백엔드
//!
//! 호스팅 IdP(GoTrue 호환 인증 API)를 앞단에서 감싸는 세션 계층입니다.
//! 가입/로그인/로그아웃/토큰 확인은 IdP 에 위임하고, IdP 가 발급한 주체 ID 를
//! 로컬 사용자 프로필(이메일, 이름)과 맞춰 보관합니다.
//!
//! # Features
//!
//! - **자격 증명 검증**: 필드별 규칙 위반을 한 번에 보고
//! - **세션 쿠키**: 액세스/리프레시 토큰을 HttpOnly 쿠키로만 전달
//! - **보호 라우트**: 쿠키의 액세스 토큰을 IdP 로 확인하는 미들웨어
//! - **MongoDB**: 사용자 프로필 영구 저장 (이메일 유니크 인덱스)
//! - **Redis**: 선택적 사용자 조회 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 엔드포인트 + 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 폼 입력, 쿠키, 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 가입 흐름
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← IdP 호출 + 로컬 저장소
//! └─────────────────┘
//!          │
//!          ▼
//! ┌──────────────────────────┐
//! │ IdP │ MongoDB + Redis    │
//! └──────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use session_auth_backend::clients::IdentityProviderClient;
//! use session_auth_backend::repositories::{IdpUserRepository, InMemoryUserStore};
//! use session_auth_backend::services::users::UserService;
//!
//! let client = IdentityProviderClient::new(&config)?;
//! let repository = IdpUserRepository::new(client, Arc::new(InMemoryUserStore::new()));
//! let user_service = UserService::new(Arc::new(repository));
//!
//! let token = user_service.register(&credentials).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod clients;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;
