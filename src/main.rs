//! 세션 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 IdP 클라이언트, 사용자 저장소, 서비스를 조립합니다.
//! 필수 설정이 빠졌거나 저장소에 연결할 수 없으면 서버를 띄우지 않고 종료합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use session_auth_backend::caching::redis::RedisClient;
use session_auth_backend::clients::IdentityProviderClient;
use session_auth_backend::config::{
    DataConfig, Environment, IdentityProviderConfig, ServerConfig, SessionConfig, StoreBackend,
};
use session_auth_backend::core::errors::{AppError, AppResult};
use session_auth_backend::db::Database;
use session_auth_backend::repositories::{
    IdpAuthRepository, IdpUserRepository, InMemoryUserStore, MongoUserStore, UserStore,
};
use session_auth_backend::routes::configure_all_routes;
use session_auth_backend::services::auth::AuthService;
use session_auth_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let environment = Environment::current();
    load_env_file(&environment);
    init_logging();

    info!("🚀 세션 인증 서비스 시작중... ({:?}, profile {})", environment, environment.profile());

    let idp_config = IdentityProviderConfig::from_env().map_err(fatal)?;
    let data_config = DataConfig::from_env().map_err(fatal)?;
    let server_config = ServerConfig::from_env();
    let session_config = web::Data::new(SessionConfig::from_env());

    let client = IdentityProviderClient::new(&idp_config).map_err(fatal)?;
    info!("🔐 IdP 엔드포인트: {}", idp_config.base_url);

    let store = initialize_user_store(&data_config).await.map_err(fatal)?;

    let auth_service = web::Data::new(AuthService::new(Arc::new(IdpAuthRepository::new(client.clone()))));
    let user_service = web::Data::new(UserService::new(Arc::new(IdpUserRepository::new(client, store))));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(server_config, auth_service, user_service, session_config).await
}

/// 기동 실패 처리
///
/// 원인을 기록하고 프로세스를 0이 아닌 코드로 끝내기 위한 `io::Error` 로 바꿉니다.
fn fatal(error: AppError) -> std::io::Error {
    error!("❌ 기동 실패: {}", error);
    std::io::Error::other(error.to_string())
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    server_config: ServerConfig,
    auth_service: web::Data<AuthService>,
    user_service: web::Data<UserService>,
    session_config: web::Data<SessionConfig>,
) -> std::io::Result<()> {
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(server_config.rate_limit_per_second)
        .burst_size(server_config.rate_limit_burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            error!("Rate Limiting 설정이 올바르지 않습니다: {:?}", server_config);
            std::io::Error::other("invalid rate limit configuration")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        server_config.rate_limit_per_second,
        server_config.rate_limit_burst_size
    );

    HttpServer::new(move || {
        App::new()
            .app_data(auth_service.clone())
            .app_data(user_service.clone())
            .app_data(session_config.clone())

            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE` (없으면 `ENVIRONMENT`) 미설정 - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file(environment: &Environment) {
    let profile = environment.profile();

    // 로거 초기화 전이라 결과는 표준 에러로만 남깁니다
    let loaded = match profile {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    if let Err(e) = loaded {
        eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=session_auth_backend::clients=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 로컬 사용자 저장소를 준비합니다
///
/// `USER_STORE=memory` 이면 프로세스 메모리 저장소를, 그 외에는 MongoDB 를 사용합니다.
/// Redis 는 선택 사항이며 연결에 실패하면 캐시 없이 계속합니다.
async fn initialize_user_store(config: &DataConfig) -> AppResult<Arc<dyn UserStore>> {
    match config.backend {
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 사용자 저장소 사용중: 재시작하면 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::connect(config).await?;

            let redis = match config.redis_url.as_deref() {
                Some(url) => match RedisClient::connect(url).await {
                    Ok(client) => {
                        info!("✅ Redis 연결 성공");
                        Some(client)
                    }
                    Err(e) => {
                        warn!("Redis 연결 실패, 캐시 없이 계속합니다: {}", e);
                        None
                    }
                },
                None => None,
            };

            let store = MongoUserStore::new(&database, redis, config);
            store.create_indexes().await?;

            Ok(Arc::new(store))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 쿠키 세션을 쓰므로 자격 증명을 허용하고 Origin 은 명시적으로 나열합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
