use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;

/// 로컬 사용자 프로필 저장소 계약
///
/// 레코드 키는 IdP subject id 입니다. 조회 결과가 없으면 `Ok(None)` 이며,
/// 저장소 자체의 실패만 `StorageUnavailable` 로 보고합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 프로필을 저장합니다. 같은 id 나 이메일이 이미 있으면 실패합니다.
    async fn add(&self, user: &User) -> AppResult<()>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;
}
