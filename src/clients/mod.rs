//! 외부 시스템 클라이언트
//!
//! - [`identity_provider`] - 호스팅 IdP(GoTrue 호환 인증 API) HTTPS 클라이언트

pub mod identity_provider;

pub use identity_provider::IdentityProviderClient;
