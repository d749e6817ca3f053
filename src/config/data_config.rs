//! 데이터 및 서버 설정 관리 모듈
//!
//! 로컬 사용자 저장소, 프로필 캐시, HTTP 서버 관련 설정을 관리합니다.

use std::env;
use std::time::Duration;
use crate::core::errors::{AppError, AppResult};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 프로세스 환경 변수로 현재 실행 환경을 감지합니다.
    ///
    /// `.env` 파일을 읽기 전에 호출되므로 파일 내용은 반영되지 않습니다.
    pub fn current() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `PROFILE`, 없으면 `ENVIRONMENT` 를 봅니다. 둘 다 없으면 `Development` 입니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("PROFILE")
            .or_else(|| lookup("ENVIRONMENT"))
            .filter(|v| !v.trim().is_empty())
            .map(|v| Self::from_str(v.trim()))
            .unwrap_or(Environment::Development)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// `.env` 파일 선택에 사용하는 프로필 이름
    pub fn profile(&self) -> &'static str {
        match self {
            Environment::Development => "dev",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "prod",
        }
    }
}

/// 로컬 사용자 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// MongoDB `users` 컬렉션
    Mongo,
    /// 프로세스 메모리 (개발/테스트 용)
    Memory,
}

/// 로컬 저장소 및 캐시 설정
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub backend: StoreBackend,
    pub mongodb_uri: Option<String>,
    pub database_name: String,
    /// 저장소 호출 하나의 최대 대기 시간
    pub store_timeout: Duration,
    /// 설정된 경우 사용자 프로필 조회 결과를 Redis 에 캐싱합니다
    pub redis_url: Option<String>,
    pub user_cache_ttl_secs: u64,
}

impl DataConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// # Errors
    ///
    /// * `AppError::Config` - 알 수 없는 `USER_STORE` 값, 또는 Mongo 백엔드인데 `MONGODB_URI` 가 없는 경우
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("USER_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("mongo") | Some("mongodb") => StoreBackend::Mongo,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(AppError::Config(format!("Unsupported USER_STORE: {}", other)));
            }
        };

        let mongodb_uri = lookup("MONGODB_URI").filter(|v| !v.trim().is_empty());
        if backend == StoreBackend::Mongo && mongodb_uri.is_none() {
            return Err(AppError::Config("MONGODB_URI must be set".to_string()));
        }

        let database_name = lookup("DATABASE_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "session_auth".to_string());

        let store_timeout_secs = lookup("STORE_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(5);

        let user_cache_ttl_secs = lookup("USER_CACHE_TTL_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(600);

        Ok(Self {
            backend,
            mongodb_uri,
            database_name,
            store_timeout: Duration::from_secs(store_timeout_secs),
            redis_url: lookup("REDIS_URL").filter(|v| !v.trim().is_empty()),
            user_cache_ttl_secs,
        })
    }
}

/// HTTP 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst_size: u32,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let rate_limit_per_second = lookup("RATE_LIMIT_PER_SECOND")
            .map(|v| {
                v.parse::<u64>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                    100
                })
            })
            .unwrap_or(100);

        let rate_limit_burst_size = lookup("RATE_LIMIT_BURST_SIZE")
            .map(|v| {
                v.parse::<u32>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                    200
                })
            })
            .unwrap_or(200);

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(3000),
            rate_limit_per_second,
            rate_limit_burst_size,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
