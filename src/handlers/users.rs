//! # Account HTTP Handlers
//!
//! 인증된 사용자의 로컬 프로필 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/me` | 현재 사용자 프로필 | 200 OK |
//!
//! 인증 미들웨어 뒤에서만 등록되며, 핸들러는 미들웨어가 넣어 둔
//! [`AuthenticatedUser`] 를 추출기로 읽습니다.
use actix_web::{get, web, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;

/// 현재 사용자 프로필 조회
///
/// # Endpoint
/// `GET /api/v1/me`
///
/// # Responses
/// * `200` - 프로필
/// * `404` - IdP 에는 있으나 로컬 프로필이 없는 주체
#[get("")]
pub async fn get_current_user(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let profile = user_service.get_user_by_id(&user.subject_id).await?;

    Ok(HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store, private"))
        .json(UserResponse::from(profile)))
}
