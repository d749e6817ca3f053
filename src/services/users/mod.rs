//! 사용자 관리 서비스 모듈
//!
//! - [`credential_validator`] - 이메일/비밀번호/이름 구조 검증
//! - [`user_service`] - 가입 단계 오케스트레이션과 프로필 조회

pub mod credential_validator;
pub mod user_service;

pub use credential_validator::validate_credentials;
pub use user_service::UserService;
