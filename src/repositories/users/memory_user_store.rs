//! 프로세스 메모리 사용자 저장소
//!
//! `USER_STORE=memory` 로 선택합니다. 재시작하면 내용이 사라지므로
//! 로컬 개발과 테스트 용도입니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use super::user_store::UserStore;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 프로필 수
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(op: &str) -> AppError {
    log::error!("[{}] 메모리 저장소 잠금이 오염되었습니다", op);
    AppError::StorageUnavailable(op.to_string())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn add(&self, user: &User) -> AppResult<()> {
        const OP: &str = "user_store.add";

        let mut users = self.users.write().map_err(|_| poisoned(OP))?;

        if users.contains_key(&user.id) || users.values().any(|u| u.email == user.email) {
            log::error!("[{}] 중복 레코드: id={}", OP, user.id);
            return Err(AppError::StorageUnavailable(format!("{} duplicate", OP)));
        }

        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(|_| poisoned("user_store.find_by_email"))?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(|_| poisoned("user_store.find_by_id"))?;
        Ok(users.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_find() {
        let store = InMemoryUserStore::new();
        store.add(&User::new("sub-1", "alice@example.com", "Alice")).await.unwrap();

        let by_id = store.find_by_id("sub-1").await.unwrap().unwrap();
        let by_email = store.find_by_email("alice@example.com").await.unwrap().unwrap();

        assert_eq!(by_id, by_email);
        assert_eq!(by_id.name, "Alice");
    }

    #[tokio::test]
    async fn test_missing_record_is_none() {
        let store = InMemoryUserStore::new();

        assert!(store.find_by_id("nope").await.unwrap().is_none());
        assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = InMemoryUserStore::new();
        store.add(&User::new("sub-1", "alice@example.com", "Alice")).await.unwrap();

        let result = store.add(&User::new("sub-2", "alice@example.com", "Alice 2")).await;

        assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
        assert_eq!(store.len(), 1);
    }
}
