//! # Identity Provider Client
//!
//! 호스팅 IdP 의 인증 REST API 를 호출하는 HTTPS 클라이언트입니다.
//!
//! ## 엔드포인트
//!
//! | 연산 | 요청 | 성공 | 실패 매핑 |
//! |------|------|------|-----------|
//! | `register` | `POST /signup` | 2xx + 세션 본문 | 400 → `EmailAlreadyUsed` |
//! | `login` | `POST /token?grant_type=password` | 2xx + 세션 본문 | 400 → `InvalidCredentials` |
//! | `logout` | `POST /logout?scope=local` (Bearer) | 204 | 그 외 → `UpstreamUnavailable` |
//! | `resolve_identity` | `GET /user` (Bearer) | 2xx + `{ "id": .. }` | 400/401/403 → `InvalidToken` |
//!
//! 위 표에 없는 400 이상 상태 코드, 전송 실패, 타임아웃, 응답 본문 해석 실패는
//! 모두 `UpstreamUnavailable` 로 정규화됩니다. 원본 에러 텍스트는 로그에만 남습니다.
//!
//! 모든 요청은 [`fetch`](IdentityProviderClient::fetch) 한 곳에서 만들어지며
//! `apikey` 헤더와 JSON Content-Type 을 공통으로 붙입니다.
//! 연산별 차이는 응답 해석뿐입니다.
//!
//! 재시도는 하지 않습니다. 가입 API 는 멱등하지 않습니다.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::json;
use crate::config::IdentityProviderConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::token::Token;

/// IdP 가 가입/로그인 성공 시 돌려주는 세션 본문
#[derive(Debug, Deserialize)]
struct SessionPayload {
    access_token: String,
    refresh_token: String,
    expires_in: f64,
    expires_at: f64,
    user: IdentityPayload,
}

/// `user` 객체 또는 `GET /user` 응답 본문
#[derive(Debug, Deserialize)]
struct IdentityPayload {
    id: String,
}

/// 상태 코드와 원본 본문
struct FetchedResponse {
    status: StatusCode,
    body: Vec<u8>,
}

/// 호스팅 IdP HTTPS 클라이언트
///
/// 내부 `reqwest::Client` 는 커넥션 풀을 공유하며 스레드 안전합니다.
/// 요청 간에 변경되는 상태는 없습니다.
#[derive(Clone)]
pub struct IdentityProviderClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl IdentityProviderClient {
    /// 설정으로부터 클라이언트를 생성합니다.
    ///
    /// 모든 호출에는 `config.timeout` 이 적용되며, 초과 시 호출을 포기하고
    /// `UpstreamUnavailable` 로 보고합니다.
    pub fn new(config: &IdentityProviderConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("IdP HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 이메일/비밀번호로 IdP 에 가입하고 세션 토큰을 받습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::EmailAlreadyUsed` - IdP 가 400 으로 거절 (중복 이메일)
    /// * `AppError::UpstreamUnavailable` - 그 외 모든 실패
    pub async fn register(&self, email: &str, password: &str) -> AppResult<Token> {
        const OP: &str = "idp.register";

        let body = json!({ "email": email, "password": password });
        let response = self.fetch(OP, Method::POST, "/signup", None, Some(body)).await?;

        match response.status {
            StatusCode::BAD_REQUEST => Err(AppError::EmailAlreadyUsed),
            status if status.as_u16() >= 400 => Err(unexpected_status(OP, status)),
            _ => decode_session(OP, &response.body),
        }
    }

    /// password grant 로 로그인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - IdP 가 400 으로 거절 (잘못된 이메일/비밀번호 조합)
    /// * `AppError::UpstreamUnavailable` - 그 외 모든 실패
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Token> {
        const OP: &str = "idp.login";

        let body = json!({ "email": email, "password": password });
        let response = self
            .fetch(OP, Method::POST, "/token?grant_type=password", None, Some(body))
            .await?;

        match response.status {
            StatusCode::BAD_REQUEST => Err(AppError::InvalidCredentials),
            status if status.as_u16() >= 400 => Err(unexpected_status(OP, status)),
            _ => decode_session(OP, &response.body),
        }
    }

    /// 액세스 토큰의 세션을 IdP 에서 종료합니다.
    ///
    /// 204 만 성공으로 봅니다. 실패는 호출자가 무시할 수 있는 best-effort 결과이므로
    /// error 가 아닌 warn 수준으로 기록합니다.
    pub async fn logout(&self, access_token: &str) -> AppResult<()> {
        const OP: &str = "idp.logout";

        let response = self
            .fetch(OP, Method::POST, "/logout?scope=local", Some(access_token), None)
            .await?;

        if response.status == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            log::warn!("[{}] 예상하지 못한 상태 코드: {}", OP, response.status.as_u16());
            Err(AppError::UpstreamUnavailable(format!(
                "{} status {}",
                OP,
                response.status.as_u16()
            )))
        }
    }

    /// 액세스 토큰의 주체(subject id)를 IdP 에 조회합니다.
    ///
    /// 결과를 캐싱하지 않으므로 만료/폐기된 토큰에 대해 이전 값을 돌려주는 일이 없습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 빈 토큰, 또는 IdP 가 400/401/403 으로 거절
    /// * `AppError::UpstreamUnavailable` - 그 외 모든 실패
    pub async fn resolve_identity(&self, access_token: &str) -> AppResult<String> {
        const OP: &str = "idp.resolve_identity";

        if access_token.trim().is_empty() {
            return Err(AppError::InvalidToken);
        }

        let response = self.fetch(OP, Method::GET, "/user", Some(access_token), None).await?;

        match response.status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                log::debug!("[{}] 토큰 거절됨: {}", OP, response.status.as_u16());
                Err(AppError::InvalidToken)
            }
            status if status.as_u16() >= 400 => Err(unexpected_status(OP, status)),
            _ => {
                let identity: IdentityPayload = serde_json::from_slice(&response.body)
                    .map_err(|e| malformed(OP, &e.to_string()))?;

                if identity.id.is_empty() {
                    return Err(malformed(OP, "empty user id"));
                }

                Ok(identity.id)
            }
        }
    }

    /// 공통 요청 헬퍼
    ///
    /// `apikey` 헤더와 JSON Content-Type 을 붙이고, Bearer 토큰이 주어지면 Authorization 헤더를 추가합니다.
    /// 전송 실패와 타임아웃은 여기서 한 번 기록한 뒤 `UpstreamUnavailable` 로 변환합니다.
    async fn fetch(
        &self,
        op: &'static str,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> AppResult<FetchedResponse> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .request(method, &url)
            .header("apikey", &self.api_key)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                log::error!("[{}] IdP 요청 시간 초과: {}", op, url);
            } else {
                log::error!("[{}] IdP 요청 실패: {}", op, e);
            }
            AppError::UpstreamUnavailable(op.to_string())
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            log::error!("[{}] IdP 응답 본문 읽기 실패 (status {}): {}", op, status.as_u16(), e);
            AppError::UpstreamUnavailable(op.to_string())
        })?;

        Ok(FetchedResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn unexpected_status(op: &str, status: StatusCode) -> AppError {
    log::error!("[{}] IdP 상태 코드 오류: {}", op, status.as_u16());
    AppError::UpstreamUnavailable(format!("{} status {}", op, status.as_u16()))
}

fn malformed(op: &str, detail: &str) -> AppError {
    log::error!("[{}] IdP 응답 형식 오류: {}", op, detail);
    AppError::UpstreamUnavailable(format!("{} malformed response", op))
}

fn decode_session(op: &str, body: &[u8]) -> AppResult<Token> {
    let payload: SessionPayload =
        serde_json::from_slice(body).map_err(|e| malformed(op, &e.to_string()))?;

    if payload.user.id.is_empty() {
        return Err(malformed(op, "empty user id"));
    }

    Ok(Token {
        subject_id: payload.user.id,
        access_token: payload.access_token,
        refresh_token: payload.refresh_token,
        expires_in: payload.expires_in as i64,
        expires_at: payload.expires_at as i64,
    })
}
