//! Persistence Layer - 客户端本地持久化
//!
//! Sled 与内存两种会话存储实现

mod memory_storage;
mod sled_storage;

pub use memory_storage::InMemorySessionStorage;
pub use sled_storage::{SledSessionStorage, SledStorageConfig};
