//! 세션 수명주기 리포지토리

pub mod auth_repo;

pub use auth_repo::{AuthRepository, IdpAuthRepository};
