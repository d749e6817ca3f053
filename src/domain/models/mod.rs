//! 영속되지 않는 도메인 값 객체

pub mod auth;
pub mod token;

pub use auth::AuthenticatedUser;
pub use token::Token;
