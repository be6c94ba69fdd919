//! Session Storage Port - 客户端本地持久化存储抽象
//!
//! 扮演浏览器 localStorage 的角色，只有 `token` 与 `user` 两个键。
//! 凭证对作为整体写入/清除：恢复时两者同在才算有会话。
//! 唯一写入者是 SessionStore；HTTP 适配器只读 token。

use thiserror::Error;

use crate::domain::session::{AuthToken, UserProfile};

/// 持久化键名
pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Failed to encode record: {0}")]
    Encode(String),
}

/// 持久化的凭证对
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedSession {
    pub token: AuthToken,
    pub user: UserProfile,
}

/// Session Storage Port
pub trait SessionStoragePort: Send + Sync {
    /// 读取完整凭证对
    ///
    /// 任一键缺失或记录损坏都视为无会话（返回 None），不报错
    fn load(&self) -> Result<Option<PersistedSession>, StorageError>;

    /// 只读取 token（HTTP 适配器在每次请求前调用）
    fn token(&self) -> Result<Option<AuthToken>, StorageError>;

    /// 整体写入凭证对
    fn store(&self, session: &PersistedSession) -> Result<(), StorageError>;

    /// 只更新 user，token 保持不变（资料刷新路径）
    fn store_user(&self, user: &UserProfile) -> Result<(), StorageError>;

    /// 清除两个键；对空存储调用是无操作
    fn clear(&self) -> Result<(), StorageError>;
}
