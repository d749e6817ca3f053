//! HTTP 경계 DTO

pub mod users;

pub use users::*;
