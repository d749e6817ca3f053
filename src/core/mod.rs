//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: IdP/저장소 실패를 호출자 관점의 종류로 정규화
//! - **FieldError**: 필드 단위 검증 위반 (필드명 + 규칙 태그)
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현

pub mod errors;

pub use errors::*;
