use std::fmt;
use serde::Deserialize;

/// 로그인 폼
///
/// 로그인은 형식 검증 없이 그대로 IdP 에 위임합니다.
/// 잘못된 조합은 IdP 가 `InvalidCredentials` 로 거절합니다.
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
