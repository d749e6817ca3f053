//! 요청 DTO
//!
//! 등록/로그인 폼 필드(`email`, `password`, `name`)를 역직렬화합니다.

pub mod credentials;
pub mod auth_request;

pub use credentials::{normalize_email, Credentials};
pub use auth_request::LoginRequest;
