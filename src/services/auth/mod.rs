//! 세션 수명주기 서비스 모듈
//!
//! 호스팅 IdP 가 토큰 발급과 검증을 모두 담당하므로
//! 이 계층은 로컬 세션 상태를 두지 않습니다.

pub mod auth_service;

pub use auth_service::AuthService;
