//! 비로그인 전용 화면 엔드포인트
//!
//! 화면 렌더링은 프론트엔드 몫이므로 각 엔드포인트는 폼이 제출될 경로와
//! 필드 목록만 알려줍니다. 이미 로그인한 요청은 라우트에 붙은 가드가 계정 화면(`/api/v1/me`)으로 보냅니다.
use actix_web::{get, HttpResponse};
use serde_json::json;

/// # Endpoint
/// `GET /auth-page/login`
#[get("/login")]
pub async fn login_page() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store, public"))
        .json(json!({
            "form": "login",
            "action": "/login",
            "fields": ["email", "password"],
        }))
}

/// # Endpoint
/// `GET /auth-page/register`
#[get("/register")]
pub async fn register_page() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store, public"))
        .json(json!({
            "form": "register",
            "action": "/register",
            "validate": "/validate-register",
            "fields": ["email", "password", "name"],
        }))
}
