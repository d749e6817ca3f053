//! # HTTP Request Handlers Module
//!
//! 세션 계층의 HTTP 엔드포인트입니다. 입력 파싱, 서비스 호출, 쿠키 발급만 담당하며
//! 비즈니스 규칙은 서비스 계층에 둡니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 폼 파싱, 쿠키, 리다이렉트     ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   AuthService / UserService                     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   AuthRepository / UserRepository               ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   IdentityProviderClient / UserStore            ← IdP, MongoDB
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: `POST /register`, `POST /login`, `POST /logout`
//! - **`validate`**: `POST /validate-register` (가입 전 입력 확인)
//! - **`users`**: `GET /api/v1/me` (인증 필요)
//! - **`pages`**: `GET /auth-page/login`, `GET /auth-page/register` (비로그인 전용)
//! - **`cookies`**: 세션 쿠키 발급/삭제 헬퍼
//!
//! 서비스 인스턴스는 `web::Data` 로 주입됩니다.

pub mod auth;
pub mod cookies;
pub mod pages;
pub mod users;
pub mod validate;
