//! 비로그인 전용 가드
//!
//! 로그인/회원가입 화면처럼 세션이 없는 사용자만 볼 화면 앞에 둡니다.
//! 토큰의 유효성은 확인하지 않고 `access_token` 쿠키 유무만 봅니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error};
use futures_util::future::LocalBoxFuture;
use crate::config::SessionConfig;
use crate::middlewares::redirect_to;

pub struct AnonymousOnly;

impl<S, B> Transform<S, ServiceRequest> for AnonymousOnly
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AnonymousOnlyService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AnonymousOnlyService {
            service: Rc::new(service),
        }))
    }
}

pub struct AnonymousOnlyService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AnonymousOnlyService<S>
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
            if req.cookie(SessionConfig::ACCESS_TOKEN_COOKIE).is_some() {
                let home_path = req
                    .app_data::<web::Data<SessionConfig>>()
                    .map(|session| session.home_path.clone())
                    .unwrap_or_else(|| SessionConfig::default().home_path);

                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, redirect_to(&home_path)).map_into_right_body());
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
