//! 캐싱 계층 모듈
//!
//! Redis 를 백엔드로 하는 사용자 프로필 read-through 캐시를 제공합니다.
//! `REDIS_URL` 이 설정되지 않으면 캐시 없이 저장소만 사용합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::{RedisClient, user_id_key};
//!
//! let cache = RedisClient::connect("redis://localhost:6379").await?;
//! cache.set_with_expiry(&user_id_key(&user.id), &user, 600).await?;
//!
//! let cached: Option<User> = cache.get(&user_id_key("123")).await?;
//! ```

pub mod redis;
