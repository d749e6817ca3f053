//! API 라우트 설정 모듈
//!
//! 세션 엔드포인트를 접근 수준별로 그룹화해 등록합니다.
//!
//! | 그룹 | 경로 | 미들웨어 |
//! |------|------|----------|
//! | Public | `POST /register`, `POST /login`, `POST /logout`, `POST /validate-register`, `GET /health` | 없음 |
//! | Anonymous only | `GET /auth-page/login`, `GET /auth-page/register` | [`AnonymousOnly`] |
//! | Protected | `GET /api/v1/me` | [`AuthMiddleware`] |
//!
//! 핸들러와 미들웨어가 쓰는 `web::Data<AuthService>`, `web::Data<UserService>`,
//! `web::Data<SessionConfig>` 는 `main` 에서 애플리케이션 데이터로 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(auth_service.clone())
//!     .app_data(user_service.clone())
//!     .app_data(session.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use crate::middlewares::{AnonymousOnly, AuthMiddleware};
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_session_routes(cfg);
    configure_page_routes(cfg);
    configure_account_routes(cfg);
}

/// 가입/로그인/로그아웃/입력 확인
///
/// ```bash
/// curl -X POST http://localhost:3000/login \
///   -d 'email=carol@example.com' -d 'password=Secr3t!' -c cookies.txt
/// ```
fn configure_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login)
        .service(handlers::auth::logout)
        .service(handlers::validate::validate_register);
}

/// 세션이 없는 사용자 전용 화면
fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth-page")
            .wrap(AnonymousOnly)
            .service(handlers::pages::login_page)
            .service(handlers::pages::register_page)
    );
}

/// 인증된 사용자 전용
///
/// ```bash
/// curl http://localhost:3000/api/v1/me -b cookies.txt
/// ```
fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/me")
            .wrap(AuthMiddleware::new())
            .service(handlers::users::get_current_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "session_auth_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "identity_provider": "GoTrue",
            "database": "MongoDB",
            "cache": "Redis"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use actix_web::cookie::Cookie;
    use actix_web::http::header::LOCATION;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use crate::clients::IdentityProviderClient;
    use crate::config::{IdentityProviderConfig, SessionConfig};
    use crate::repositories::{IdpAuthRepository, IdpUserRepository, InMemoryUserStore};
    use crate::services::auth::AuthService;
    use crate::services::users::UserService;

    const SUBJECT: &str = "7d4c1a9e-0000-4000-8000-000000000042";

    fn session_body() -> Value {
        json!({
            "access_token": "access-abc",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1_700_003_600,
            "refresh_token": "refresh-xyz",
            "user": { "id": SUBJECT }
        })
    }

    /// 가입 1회 성공 후 중복 거절, 토큰 조회, 로그아웃을 흉내내는 IdP
    async fn start_idp() -> MockServer {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/signup"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "msg": "User already registered" })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(query_param("grant_type", "password"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("authorization", "Bearer access-abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": SUBJECT })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/logout"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        server
    }

    struct Wiring {
        auth_service: web::Data<AuthService>,
        user_service: web::Data<UserService>,
        store: Arc<InMemoryUserStore>,
    }

    fn wire(server: &MockServer) -> Wiring {
        let client = IdentityProviderClient::new(&IdentityProviderConfig {
            api_key: "test-key".to_string(),
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        let store = Arc::new(InMemoryUserStore::new());
        let auth_repository = Arc::new(IdpAuthRepository::new(client.clone()));
        let user_repository = Arc::new(IdpUserRepository::new(client, store.clone()));

        Wiring {
            auth_service: web::Data::new(AuthService::new(auth_repository)),
            user_service: web::Data::new(UserService::new(user_repository)),
            store,
        }
    }

    macro_rules! app {
        ($wiring:expr) => {
            test::init_service(
                App::new()
                    .app_data($wiring.auth_service.clone())
                    .app_data($wiring.user_service.clone())
                    .app_data(web::Data::new(SessionConfig::default()))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_register_then_access_account_then_logout() {
        let server = start_idp().await;
        let wiring = wire(&server);
        let app = app!(wiring);

        // 가입
        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("email", "carol@example.com"), ("password", "Secr3t!"), ("name", "Carol")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let access = resp
            .response()
            .cookies()
            .find(|c| c.name() == "access_token")
            .map(|c| c.into_owned())
            .unwrap();
        assert_eq!(access.value(), "access-abc");
        assert!(resp.response().cookies().any(|c| c.name() == "refresh_token"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user_id"], SUBJECT);
        assert!(body.get("access_token").is_none());

        // 쿠키로 보호된 계정 조회
        let req = test::TestRequest::get()
            .uri("/api/v1/me")
            .cookie(Cookie::new("access_token", access.value().to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let profile: Value = test::read_body_json(resp).await;
        assert_eq!(profile["id"], SUBJECT);
        assert_eq!(profile["email"], "carol@example.com");
        assert_eq!(profile["name"], "Carol");

        // 로그아웃
        let req = test::TestRequest::post()
            .uri("/logout")
            .cookie(Cookie::new("access_token", access.value().to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/auth-page/login");
    }

    #[actix_web::test]
    async fn test_signed_in_user_is_sent_from_login_page_to_account() {
        let server = start_idp().await;
        let wiring = wire(&server);
        let app = app!(wiring);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("email", "carol@example.com"), ("password", "Secr3t!"), ("name", "Carol")])
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri("/auth-page/login")
            .cookie(Cookie::new("access_token", "access-abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);

        let location = resp.headers().get(LOCATION).unwrap().to_str().unwrap().to_string();
        assert_eq!(location, "/api/v1/me");

        let req = test::TestRequest::get()
            .uri(&location)
            .cookie(Cookie::new("access_token", "access-abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let profile: Value = test::read_body_json(resp).await;
        assert_eq!(profile["id"], SUBJECT);
    }

    #[actix_web::test]
    async fn test_registered_token_resolves_to_same_subject() {
        let server = start_idp().await;
        let wiring = wire(&server);

        let token = wiring
            .user_service
            .register(&crate::domain::dto::users::request::Credentials::new(
                "carol@example.com",
                "Secr3t!",
                "Carol",
            ))
            .await
            .unwrap();

        let subject = wiring.auth_service.resolve_identity(&token.access_token).await.unwrap();
        assert_eq!(subject, token.subject_id);
    }

    #[actix_web::test]
    async fn test_login_happy_path_matches_registered_user() {
        let server = start_idp().await;
        let wiring = wire(&server);
        let app = app!(wiring);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("email", "carol@example.com"), ("password", "Secr3t!"), ("name", "Carol")])
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "carol@example.com"), ("password", "Secr3t!")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let user = wiring.user_service.get_user_by_email("carol@example.com").await.unwrap();
        assert_eq!(body["user_id"], user.id.as_str());
    }

    #[actix_web::test]
    async fn test_duplicate_signup_creates_no_second_record() {
        let server = start_idp().await;
        let wiring = wire(&server);
        let app = app!(wiring);

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/register")
                .set_form([("email", "alice@example.com"), ("password", "Secr3t!"), ("name", "Alice")])
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), expected);
        }

        assert_eq!(wiring.store.len(), 1);
    }

    #[actix_web::test]
    async fn test_short_password_is_rejected_before_idp() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
            .expect(0)
            .mount(&server)
            .await;
        let wiring = wire(&server);
        let app = app!(wiring);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("email", "bob@example.com"), ("password", "abc"), ("name", "Bob")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["fields"][0]["field"], "password");
        assert_eq!(body["fields"][0]["rule"], "min-length");
    }

    #[actix_web::test]
    async fn test_account_requires_valid_session() {
        let server = start_idp().await;
        let wiring = wire(&server);
        let app = app!(wiring);

        let req = test::TestRequest::get()
            .uri("/api/v1/me")
            .cookie(Cookie::new("access_token", "revoked"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/auth-page/login");
    }

    #[actix_web::test]
    async fn test_health_check() {
        let server = MockServer::start().await;
        let wiring = wire(&server);
        let app = app!(wiring);

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
