//! 세션 쿠키 헬퍼
//!
//! 모든 세션 쿠키는 `HttpOnly`, `Secure`, `Path=/` 입니다.

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::HttpRequest;
use crate::config::SessionConfig;
use crate::domain::models::token::Token;

fn session_cookie(name: &str, value: &str) -> Cookie<'static> {
    Cookie::build(name.to_string(), value.to_string())
        .http_only(true)
        .secure(true)
        .path("/")
        .finish()
}

/// 토큰으로 액세스/리프레시 쿠키 쌍을 만듭니다.
///
/// 액세스 쿠키의 `Max-Age` 는 토큰 유효 시간이고, 리프레시 쿠키는 세션 쿠키입니다.
pub fn session_cookies(token: &Token) -> (Cookie<'static>, Cookie<'static>) {
    let mut access = session_cookie(SessionConfig::ACCESS_TOKEN_COOKIE, &token.access_token);
    access.set_max_age(Duration::seconds(token.expires_in.max(0)));

    let refresh = session_cookie(SessionConfig::REFRESH_TOKEN_COOKIE, &token.refresh_token);

    (access, refresh)
}

/// 같은 이름의 쿠키를 즉시 만료시키는 쿠키
pub fn removal_cookie(name: &str) -> Cookie<'static> {
    let mut cookie = session_cookie(name, "");
    cookie.make_removal();
    cookie
}

/// 요청이 가진 모든 쿠키의 만료 쿠키 목록
pub fn removal_cookies_for(req: &HttpRequest) -> Vec<Cookie<'static>> {
    match req.cookies() {
        Ok(cookies) => cookies.iter().map(|c| removal_cookie(c.name())).collect(),
        Err(e) => {
            log::debug!("쿠키 헤더 파싱 실패: {}", e);
            Vec::new()
        }
    }
}

/// 요청의 액세스 토큰 쿠키 값
pub fn access_token_from(req: &HttpRequest) -> Option<String> {
    req.cookie(SessionConfig::ACCESS_TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}
