//! Session HTTP Handlers
//!
//! 회원가입, 로그인, 로그아웃 엔드포인트입니다.
//! 입력은 `application/x-www-form-urlencoded` 폼 필드(`email`, `password`, `name`)로 받습니다.
//!
//! # Cookies
//!
//! 성공 시 `access_token`(Max-Age = 토큰 유효 시간)과 `refresh_token`(세션 쿠키)을 발급합니다.
//! 토큰 값은 응답 본문에 싣지 않습니다.
use actix_web::http::header::LOCATION;
use actix_web::{post, web, HttpRequest, HttpResponse};
use crate::config::SessionConfig;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{Credentials, LoginRequest};
use crate::domain::dto::users::response::SessionResponse;
use crate::handlers::cookies::{access_token_from, removal_cookies_for, session_cookies};
use crate::services::auth::AuthService;
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /register`
///
/// # Responses
/// * `201` - 가입 완료, 세션 쿠키 발급
/// * `400` - 필드 검증 실패 (`fields` 목록 포함)
/// * `409` - 이미 사용 중인 이메일
/// * `503` / `500` - 일반 재시도 안내
#[post("/register")]
pub async fn register(
    user_service: web::Data<UserService>,
    form: web::Form<Credentials>,
) -> Result<HttpResponse, AppError> {
    let token = user_service.register(&form).await?;
    let (access, refresh) = session_cookies(&token);

    Ok(HttpResponse::Created()
        .cookie(access)
        .cookie(refresh)
        .json(SessionResponse::new(&token, "회원가입이 완료되었습니다")))
}

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /login`
///
/// # Responses
/// * `200` - 로그인 성공, 세션 쿠키 발급
/// * `401` - 잘못된 이메일 또는 비밀번호
/// * `503` - 일반 재시도 안내
#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    form: web::Form<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let token = auth_service.login(&form.email, &form.password).await?;
    let (access, refresh) = session_cookies(&token);

    Ok(HttpResponse::Ok()
        .cookie(access)
        .cookie(refresh)
        .json(SessionResponse::new(&token, "로그인되었습니다")))
}

/// 로그아웃 핸들러
///
/// IdP 로그아웃 결과와 무관하게 요청이 가진 모든 쿠키를 만료시키고
/// 로그인 화면으로 리다이렉트합니다.
///
/// # Endpoint
/// `POST /logout`
#[post("/logout")]
pub async fn logout(
    req: HttpRequest,
    auth_service: web::Data<AuthService>,
    session: web::Data<SessionConfig>,
) -> HttpResponse {
    if let Some(access_token) = access_token_from(&req) {
        if let Err(e) = auth_service.logout(&access_token).await {
            log::warn!("IdP 로그아웃 실패, 로컬 세션은 정리합니다: {}", e);
        }
    }

    let mut response = HttpResponse::Found();
    response.insert_header((LOCATION, session.login_path.as_str()));

    for cookie in removal_cookies_for(&req) {
        response.cookie(cookie);
    }

    response.finish()
}
