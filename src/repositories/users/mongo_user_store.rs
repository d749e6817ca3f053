//! # MongoDB 사용자 저장소
//!
//! `users` 컬렉션에 프로필을 저장합니다. 문서 `_id` 는 IdP subject id 입니다.
//!
//! ## 캐싱 전략
//!
//! `REDIS_URL` 이 설정된 경우 조회 결과를 Redis 에 보관합니다.
//!
//! - **키 패턴**: `user:{id}`, `user:email:{email}`
//! - **TTL**: `USER_CACHE_TTL_SECS` (기본 600초)
//! - 프로필은 생성 후 변경되지 않으므로 적중한 캐시는 항상 최신입니다.
//! - 캐시 오류는 경고만 남기고 MongoDB 조회로 진행합니다.
//!
//! ## 타임아웃
//!
//! 모든 MongoDB 호출은 `STORE_TIMEOUT_SECS` 안에 끝나야 하며,
//! 초과하면 호출을 포기하고 `StorageUnavailable` 로 보고합니다.

use std::future::IntoFuture;
use std::time::Duration;
use async_trait::async_trait;
use mongodb::{Collection, IndexModel, bson::doc, options::IndexOptions};
use crate::caching::redis::{RedisClient, user_email_key, user_id_key};
use crate::config::DataConfig;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use super::user_store::UserStore;

#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<User>,
    redis: Option<RedisClient>,
    timeout: Duration,
    cache_ttl_secs: u64,
}

impl MongoUserStore {
    pub fn new(database: &Database, redis: Option<RedisClient>, config: &DataConfig) -> Self {
        Self {
            collection: database.users(),
            redis,
            timeout: config.store_timeout,
            cache_ttl_secs: config.user_cache_ttl_secs,
        }
    }

    /// 이메일 유니크 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    ///
    /// 기동 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.bounded("user_store.create_indexes", self.collection.create_index(email_index))
            .await?;

        log::info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    /// MongoDB 호출에 타임아웃을 적용하고 실패를 `StorageUnavailable` 로 변환합니다.
    async fn bounded<T, F>(&self, op: &'static str, future: F) -> AppResult<T>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        match tokio::time::timeout(self.timeout, future).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                log::error!("[{}] MongoDB 오류: {}", op, e);
                Err(AppError::StorageUnavailable(op.to_string()))
            }
            Err(_) => {
                log::error!("[{}] MongoDB 호출 시간 초과 ({:?})", op, self.timeout);
                Err(AppError::StorageUnavailable(op.to_string()))
            }
        }
    }

    async fn cached(&self, key: &str) -> Option<User> {
        let redis = self.redis.as_ref()?;

        match redis.get::<User>(key).await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("캐시 조회 실패 ({}): {}", key, e);
                None
            }
        }
    }

    async fn remember(&self, user: &User) {
        let Some(redis) = self.redis.as_ref() else {
            return;
        };

        for key in [user_id_key(&user.id), user_email_key(&user.email)] {
            if let Err(e) = redis.set_with_expiry(&key, user, self.cache_ttl_secs).await {
                log::warn!("캐시 저장 실패 ({}): {}", key, e);
            }
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn add(&self, user: &User) -> AppResult<()> {
        self.bounded("user_store.add", self.collection.insert_one(user)).await?;

        // 만료 전 남아 있을 수 있는 같은 키의 항목 제거
        if let Some(redis) = &self.redis {
            let keys = [user_id_key(&user.id), user_email_key(&user.email)];
            if let Err(e) = redis.del_multiple(&keys).await {
                log::warn!("캐시 무효화 실패 ({}): {}", user.id, e);
            }
        }

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        if let Some(user) = self.cached(&user_email_key(email)).await {
            return Ok(Some(user));
        }

        let user = self
            .bounded("user_store.find_by_email", self.collection.find_one(doc! { "email": email }))
            .await?;

        if let Some(ref user) = user {
            self.remember(user).await;
        }

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        if let Some(user) = self.cached(&user_id_key(id)).await {
            return Ok(Some(user));
        }

        let user = self
            .bounded("user_store.find_by_id", self.collection.find_one(doc! { "_id": id }))
            .await?;

        if let Some(ref user) = user {
            self.remember(user).await;
        }

        Ok(user)
    }
}
