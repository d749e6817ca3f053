//! # Authentication Configuration Module
//!
//! 외부 IdP(Supabase GoTrue 호환 인증 서버) 연결 정보와
//! 세션 쿠키 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export IDP_API_KEY="your-project-anon-key"
//! # 둘 중 하나는 반드시 설정되어야 합니다. IDP_BASE_URL 이 우선합니다.
//! export IDP_PROJECT="your-project-ref"
//! export IDP_BASE_URL="https://your-project-ref.supabase.co/auth/v1"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export IDP_TIMEOUT_SECS="10"
//! export LOGIN_PATH="/auth-page/login"
//! ```
//!
//! 필수 값이 없으면 요청 단위 에러가 아니라 기동 실패로 처리됩니다.

use std::env;
use std::time::Duration;
use crate::core::errors::{AppError, AppResult};

/// IdP 호출 기본 타임아웃 (초)
pub const DEFAULT_IDP_TIMEOUT_SECS: u64 = 10;

/// IdP 연결 설정
#[derive(Debug, Clone)]
pub struct IdentityProviderConfig {
    /// 모든 요청에 `apikey` 헤더로 첨부되는 API 키
    pub api_key: String,
    /// 인증 API 기본 URL (예: `https://{project}.supabase.co/auth/v1`)
    pub base_url: String,
    /// 개별 IdP 호출의 최대 대기 시간
    pub timeout: Duration,
}

impl IdentityProviderConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Config` - `IDP_API_KEY` 가 없거나, `IDP_BASE_URL` 과 `IDP_PROJECT` 가 모두 없는 경우
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(lookup("IDP_API_KEY"))
            .ok_or_else(|| AppError::Config("IDP_API_KEY must be set".to_string()))?;

        let base_url = match non_empty(lookup("IDP_BASE_URL")) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                let project = non_empty(lookup("IDP_PROJECT")).ok_or_else(|| {
                    AppError::Config("IDP_PROJECT or IDP_BASE_URL must be set".to_string())
                })?;
                format!("https://{}.supabase.co/auth/v1", project)
            }
        };

        let timeout_secs = lookup("IDP_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_IDP_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// 세션 쿠키 및 리다이렉트 설정
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// 인증되지 않은 요청이 보내지는 로그인 화면 경로
    pub login_path: String,
    /// 로그인 후 기본 진입 경로. 인증된 계정 라우트여야 합니다.
    pub home_path: String,
}

impl SessionConfig {
    pub const ACCESS_TOKEN_COOKIE: &'static str = "access_token";
    pub const REFRESH_TOKEN_COOKIE: &'static str = "refresh_token";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            login_path: non_empty(lookup("LOGIN_PATH"))
                .unwrap_or_else(|| "/auth-page/login".to_string()),
            home_path: non_empty(lookup("HOME_PATH"))
                .unwrap_or_else(|| "/api/v1/me".to_string()),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_base_url_from_project() {
        let config = IdentityProviderConfig::from_lookup(lookup_from(&[
            ("IDP_API_KEY", "anon"),
            ("IDP_PROJECT", "abcd1234"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://abcd1234.supabase.co/auth/v1");
        assert_eq!(config.api_key, "anon");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_IDP_TIMEOUT_SECS));
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let config = IdentityProviderConfig::from_lookup(lookup_from(&[
            ("IDP_API_KEY", "anon"),
            ("IDP_PROJECT", "abcd1234"),
            ("IDP_BASE_URL", "http://localhost:9999/auth/v1/"),
            ("IDP_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9999/auth/v1");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let result = IdentityProviderConfig::from_lookup(lookup_from(&[("IDP_PROJECT", "abcd1234")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_missing_endpoint_is_fatal() {
        let result = IdentityProviderConfig::from_lookup(lookup_from(&[("IDP_API_KEY", "anon"), ("IDP_PROJECT", "  ")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.login_path, "/auth-page/login");
        assert_eq!(config.home_path, "/api/v1/me");
    }
}
