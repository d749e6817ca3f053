//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::config::SessionConfig;
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::redirect_to;
use crate::services::auth::AuthService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let user = authenticate(&req).await;

            match user {
                Some(user) => {
                    log::debug!("인증 성공: subject {}", user.subject_id);
                    // 사용자 정보를 Request Extensions에 저장
                    req.extensions_mut().insert(user);
                }
                None => {
                    let login_path = req
                        .app_data::<web::Data<SessionConfig>>()
                        .map(|session| session.login_path.clone())
                        .unwrap_or_else(|| SessionConfig::default().login_path);

                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, redirect_to(&login_path))
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 `access_token` 쿠키로 주체를 확인
async fn authenticate(req: &ServiceRequest) -> Option<AuthenticatedUser> {
    let Some(auth_service) = req.app_data::<web::Data<AuthService>>() else {
        log::error!("AuthService 가 애플리케이션 데이터에 등록되지 않았습니다");
        return None;
    };

    let access_token = req
        .cookie(SessionConfig::ACCESS_TOKEN_COOKIE)
        .map(|c| c.value().to_string());

    auth_service.authenticate(access_token.as_deref()).await
}
