//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 요청 사이에 변경 가능한 상태를 갖지 않는 파사드이며,
//! 리포지토리 트레이트 객체를 생성자로 주입받습니다.
//!
//! - [`auth`] - 로그인/로그아웃/액세스 토큰 주체 확인
//! - [`users`] - 자격 증명 검증, 가입 오케스트레이션, 프로필 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthService, users::UserService};
//!
//! let auth_service = AuthService::new(auth_repo);
//! let user_service = UserService::new(user_repo);
//! let token = auth_service.login("carol@example.com", "Secr3t!").await?;
//! ```

pub mod users;
pub mod auth;
