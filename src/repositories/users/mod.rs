//! 사용자 가입 및 로컬 프로필 리포지토리
//!
//! - [`user_repo`] - IdP 가입 + 로컬 저장소를 묶는 [`UserRepository`]
//! - [`user_store`] - 로컬 프로필 저장소 계약 [`UserStore`]
//! - [`mongo_user_store`] - MongoDB `users` 컬렉션 구현 (선택적 Redis 캐시)
//! - [`memory_user_store`] - 프로세스 메모리 구현

pub mod user_repo;
pub mod user_store;
pub mod mongo_user_store;
pub mod memory_user_store;

pub use user_repo::{IdpUserRepository, UserRepository};
pub use user_store::UserStore;
pub use mongo_user_store::MongoUserStore;
pub use memory_user_store::InMemoryUserStore;
