//! 미들웨어 모듈
//!
//! 세션 쿠키를 기준으로 라우트 접근을 제어하는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - `access_token` 쿠키를 IdP 로 확인
//! - 성공 시 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser) 를 request extension 에 저장
//! - 쿠키가 없거나 확인에 실패하면 로그인 화면으로 302 리다이렉트
//!
//! ### 2. 비로그인 전용 가드 (AnonymousOnly)
//! - `access_token` 쿠키가 있으면 계정 화면(`/api/v1/me`)으로 302 리다이렉트
//!
//! 두 미들웨어 모두 `web::Data<AuthService>` 와 `web::Data<SessionConfig>` 를
//! 애플리케이션 데이터에서 읽습니다.
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/me")
//!             .wrap(AuthMiddleware::new())
//!             .service(handlers::users::get_current_user)
//!     )
//!     .service(
//!         web::scope("/auth-page")
//!             .wrap(AnonymousOnly)
//!             .service(handlers::pages::login_page)
//!     )
//! ```

pub mod auth_middleware;
pub mod anonymous_only;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
pub use anonymous_only::AnonymousOnly;

use actix_web::http::header::LOCATION;
use actix_web::HttpResponse;

/// 302 리다이렉트 응답
pub(crate) fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}
