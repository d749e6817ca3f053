//! 로컬 저장소에 영속되는 엔티티

pub mod users;

pub use users::User;
