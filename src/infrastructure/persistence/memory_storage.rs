//! In-Memory Session Storage Implementation
//!
//! 测试与"不记住登录"的临时会话用。存储形态与 Sled 实现一致
//! （键 → 原始字节），损坏/半对等边界行为可在测试里直接构造。

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{
    PersistedSession, SessionStoragePort, StorageError, TOKEN_KEY, USER_KEY,
};
use crate::domain::session::{AuthToken, UserProfile};

/// 内存会话存储
#[derive(Default)]
pub struct InMemorySessionStorage {
    entries: DashMap<&'static str, Vec<u8>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 直接写入原始字节（测试构造半对/损坏记录用）
    pub fn insert_raw(&self, key: &'static str, value: Vec<u8>) {
        self.entries.insert(key, value);
    }

    fn read(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|v| v.clone())
    }
}

impl SessionStoragePort for InMemorySessionStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        let token = match self.read(TOKEN_KEY) {
            Some(raw) => match String::from_utf8(raw) {
                Ok(s) => AuthToken::new(s),
                Err(_) => return Ok(None),
            },
            None => return Ok(None),
        };

        let user = match self.read(USER_KEY) {
            Some(raw) => match serde_json::from_slice::<UserProfile>(&raw) {
                Ok(user) => user,
                Err(e) => {
                    tracing::warn!(error = %e, "In-memory user record is corrupted, treating session as absent");
                    return Ok(None);
                }
            },
            None => return Ok(None),
        };

        Ok(Some(PersistedSession { token, user }))
    }

    fn token(&self) -> Result<Option<AuthToken>, StorageError> {
        Ok(self
            .read(TOKEN_KEY)
            .and_then(|raw| String::from_utf8(raw).ok())
            .map(AuthToken::new))
    }

    fn store(&self, session: &PersistedSession) -> Result<(), StorageError> {
        let user =
            serde_json::to_vec(&session.user).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.entries
            .insert(TOKEN_KEY, session.token.as_str().as_bytes().to_vec());
        self.entries.insert(USER_KEY, user);
        Ok(())
    }

    fn store_user(&self, user: &UserProfile) -> Result<(), StorageError> {
        let raw = serde_json::to_vec(user).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.entries.insert(USER_KEY, raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.entries.remove(TOKEN_KEY);
        self.entries.remove(USER_KEY);
        Ok(())
    }
}
