//! # Configuration Module
//!
//! 환경 변수 기반의 애플리케이션 설정을 관리합니다.
//! 모든 설정은 기동 시 한 번만 읽히며, 필수 값 누락은 기동 실패로 처리됩니다.
//!
//! - [`auth_config`] - IdP 연결 정보와 세션 쿠키 설정
//! - [`data_config`] - 실행 환경, 로컬 저장소, 캐시, HTTP 서버 설정

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
