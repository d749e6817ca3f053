//! # Domain Layer
//!
//! 세션/인증 계층의 도메인 타입을 정의합니다.
//!
//! - [`entities`] - 로컬 저장소에 영속되는 엔티티 (`User`)
//! - [`models`] - 영속되지 않는 값 객체 (`Token`, `AuthenticatedUser`)
//! - [`dto`] - HTTP 경계에서 주고받는 요청/응답 구조체

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
