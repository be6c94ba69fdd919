//! Sled-based Session Storage Implementation
//!
//! 客户端本地持久化存储，两个键:
//! - `token`: 原样字节的 Bearer token
//! - `user`: JSON 序列化的用户记录
//!
//! 凭证对通过 sled::Batch 整体写入/清除，两个键要么同在要么同缺

use sled::{Batch, Db};
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{
    PersistedSession, SessionStoragePort, StorageError, TOKEN_KEY, USER_KEY,
};
use crate::domain::session::{AuthToken, UserProfile};

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStorageConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledStorageConfig {
    fn default() -> Self {
        Self {
            db_path: "data/session.sled".to_string(),
        }
    }
}

/// Sled 会话存储
pub struct SledSessionStorage {
    db: Db,
}

impl SledSessionStorage {
    pub fn new(config: &SledStorageConfig) -> Result<Self, StorageError> {
        let db = sled::open(&config.db_path).map_err(|e| StorageError::Backend(e.to_string()))?;
        tracing::info!(db_path = %config.db_path, "SledSessionStorage initialized");
        Ok(Self { db })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        Self::new(&SledStorageConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        })
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn read(&self, key: &str) -> Result<Option<sled::IVec>, StorageError> {
        self.db
            .get(key)
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

impl SessionStoragePort for SledSessionStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        let token = match self.read(TOKEN_KEY)? {
            Some(raw) => match String::from_utf8(raw.to_vec()) {
                Ok(s) => AuthToken::new(s),
                Err(_) => {
                    tracing::warn!("Persisted token is not valid UTF-8, treating session as absent");
                    return Ok(None);
                }
            },
            None => return Ok(None),
        };

        let user = match self.read(USER_KEY)? {
            Some(raw) => match serde_json::from_slice::<UserProfile>(&raw) {
                Ok(user) => user,
                Err(e) => {
                    tracing::warn!(error = %e, "Persisted user record is corrupted, treating session as absent");
                    return Ok(None);
                }
            },
            // token 落单（半个凭证对）按无会话处理
            None => return Ok(None),
        };

        Ok(Some(PersistedSession { token, user }))
    }

    fn token(&self) -> Result<Option<AuthToken>, StorageError> {
        Ok(self
            .read(TOKEN_KEY)?
            .and_then(|raw| String::from_utf8(raw.to_vec()).ok())
            .map(AuthToken::new))
    }

    fn store(&self, session: &PersistedSession) -> Result<(), StorageError> {
        let user =
            serde_json::to_vec(&session.user).map_err(|e| StorageError::Encode(e.to_string()))?;

        let mut batch = Batch::default();
        batch.insert(TOKEN_KEY, session.token.as_str().as_bytes());
        batch.insert(USER_KEY, user);
        self.db
            .apply_batch(batch)
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        tracing::debug!(user_id = %session.user.id, "Session persisted");
        Ok(())
    }

    fn store_user(&self, user: &UserProfile) -> Result<(), StorageError> {
        let raw = serde_json::to_vec(user).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.db
            .insert(USER_KEY, raw)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut batch = Batch::default();
        batch.remove(TOKEN_KEY);
        batch.remove(USER_KEY);
        self.db
            .apply_batch(batch)
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}
