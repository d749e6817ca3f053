use std::fmt;

/// IdP 가입/로그인 교환으로 얻은 세션 토큰
///
/// 세션을 여는 응답 하나가 살아있는 동안만 존재하며 저장하지 않습니다.
/// `subject_id` 외의 값은 이 계층에서 해석하지 않는 불투명 값입니다.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    /// IdP 가 발급한 사용자 식별자 (로컬 `User.id` 와 동일)
    pub subject_id: String,
    pub access_token: String,
    pub refresh_token: String,
    /// 액세스 토큰 유효 시간 (초)
    pub expires_in: i64,
    /// 액세스 토큰 만료 시각 (Unix epoch 초)
    pub expires_at: i64,
}

// 토큰 값이 로그에 남지 않도록 Debug 출력에서 가립니다.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("subject_id", &self.subject_id)
            .field("access_token", &"***")
            .field("refresh_token", &"***")
            .field("expires_in", &self.expires_in)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
