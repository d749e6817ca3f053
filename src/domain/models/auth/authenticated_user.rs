//! 요청 범위 인증 정보
//!
//! 인증 미들웨어가 IdP 로 액세스 토큰을 확인한 뒤 한 번 채워 넣고,
//! 이후 핸들러는 추출기로 읽기만 합니다. 전역 조회는 사용하지 않습니다.

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// 인증된 요청의 주체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// IdP 가 확인해 준 subject id
    pub subject_id: String,
}

impl AuthenticatedUser {
    pub fn new(subject_id: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
        }
    }
}

/// 핸들러에서 인증된 사용자 정보를 추출
///
/// 미들웨어가 Request Extensions 에 넣어 둔 값을 꺼냅니다.
/// 값이 없으면 401 을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}
