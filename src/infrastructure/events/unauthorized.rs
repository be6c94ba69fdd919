//! Unauthorized Signal - 进程内未授权事件
//!
//! HTTP 适配器与 SessionStore 之间的解耦通道：任一请求收到 401 即触发。
//! 无载荷、即发即忘；处理方（SessionStore）的清理动作幂等，
//! 连发多次信号与一次效果相同。

use tokio::sync::broadcast;

/// 通道容量 — 信号无载荷且处理幂等，积压保留有限个即可
const CHANNEL_CAPACITY: usize = 16;

/// 未授权信号
#[derive(Clone)]
pub struct UnauthorizedSignal {
    tx: broadcast::Sender<()>,
}

impl UnauthorizedSignal {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// 触发信号
    ///
    /// 无订阅者时仅记 debug 日志，不视为错误
    pub fn raise(&self) {
        if self.tx.send(()).is_err() {
            tracing::debug!("Unauthorized signal raised with no active subscriber");
        }
    }

    /// 订阅信号
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }
}

impl Default for UnauthorizedSignal {
    fn default() -> Self {
        Self::new()
    }
}
