//! Session Store - 会话状态的唯一事实来源
//!
//! 启动协议: 组合根先同步调用 hydrate()，再挂载未授权信号监听，
//! 之后路由守卫才允许做出第一次跳转决策。
//!
//! 与 401 触发的登出并发进行的登录按"存储上最后写入者胜"处理，
//! 不做串行化。

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::application::ports::{AuthGatewayPort, PersistedSession, SessionStoragePort};
use crate::domain::session::{SessionState, UserProfile};

/// 登录失败时的兜底文案
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// 事件通道容量
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// 登录结果
///
/// 登录永不向调用方抛错；失败时携带用户可见的 message
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl LoginOutcome {
    fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// 会话事件，供导航层/界面壳订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// 登录成功
    SignedIn,
    /// 会话结束（登出、未授权信号或刷新失败），导航层应回到登录入口
    SignedOut,
    /// 刷新成功，user 已替换；角色可能变化，路由守卫需重新评估
    ProfileUpdated,
}

/// Session Store
///
/// 单实例、显式注入，不做模块级全局状态
pub struct SessionStore {
    auth: Arc<dyn AuthGatewayPort>,
    storage: Arc<dyn SessionStoragePort>,
    state: RwLock<SessionState>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionStore {
    pub fn new(auth: Arc<dyn AuthGatewayPort>, storage: Arc<dyn SessionStoragePort>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            auth,
            storage,
            state: RwLock::new(SessionState::Hydrating),
            events,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 从持久化存储恢复会话
    ///
    /// 应用生命周期内只执行一次；无论是否找到会话，
    /// 返回后 loading 必然已清除。重复调用是无操作。
    pub fn hydrate(&self) {
        if !self.state.read().is_loading() {
            tracing::debug!("Session already hydrated, ignoring");
            return;
        }

        let next = match self.storage.load() {
            Ok(Some(persisted)) => {
                tracing::info!(user_id = %persisted.user.id, "Session restored from storage");
                SessionState::Authenticated(persisted.user)
            }
            Ok(None) => SessionState::Anonymous,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted session");
                SessionState::Anonymous
            }
        };
        *self.state.write() = next;
    }

    /// 当前会话快照
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    /// 当前用户（未登录为 None）
    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.read().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    /// 订阅会话事件
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// 登录
    ///
    /// 成功时先整体持久化凭证对、再更新内存；失败时内存与存储都保持原样。
    /// 失败 message 取服务端载荷的 message 字段，缺失时回退为固定文案。
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let response = match self.auth.login(email, password).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(email = %email, error = %e, "Login failed");
                let message = e.server_message().unwrap_or(INVALID_CREDENTIALS).to_string();
                return LoginOutcome::failed(message);
            }
        };

        let persisted = PersistedSession {
            token: response.token,
            user: response.user.clone(),
        };
        // 存储写入失败时不更新内存，保持内存与存储一致
        if let Err(e) = self.storage.store(&persisted) {
            tracing::error!(error = %e, "Failed to persist session");
            return LoginOutcome::failed("Unable to persist session");
        }

        *self.state.write() = SessionState::Authenticated(response.user);
        self.publish(SessionEvent::SignedIn);
        tracing::info!(email = %email, "Login succeeded");
        LoginOutcome::ok()
    }

    /// 登出
    ///
    /// 清除内存与持久化存储；对已登出的会话调用是无操作
    pub fn logout(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!(error = %e, "Failed to clear persisted session");
        }

        let was_authenticated = {
            let mut state = self.state.write();
            let was = state.is_authenticated();
            *state = SessionState::Anonymous;
            was
        };

        if was_authenticated {
            tracing::info!("Signed out");
            self.publish(SessionEvent::SignedOut);
        }
    }

    /// 刷新用户资料
    ///
    /// 成功时只替换 user（token 不动）并重新持久化；
    /// 任何失败都按无效会话处理，走完整的登出流程
    pub async fn refresh(&self) {
        match self.auth.fetch_profile().await {
            Ok(user) => {
                if let Err(e) = self.storage.store_user(&user) {
                    tracing::warn!(error = %e, "Failed to re-persist profile");
                }
                *self.state.write() = SessionState::Authenticated(user);
                self.publish(SessionEvent::ProfileUpdated);
                tracing::debug!("Profile refreshed");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Profile refresh failed, treating session as invalid");
                self.logout();
            }
        }
    }

    /// 挂载未授权信号监听
    ///
    /// 必须在任何受保护内容渲染之前建立；返回的句柄析构时终止监听任务，
    /// 重复挂载/卸载不会泄漏监听器
    pub fn attach_unauthorized(
        self: &Arc<Self>,
        mut signal: broadcast::Receiver<()>,
    ) -> UnauthorizedSubscription {
        let store = Arc::clone(self);
        let handle = tokio::spawn(async move {
            loop {
                match signal.recv().await {
                    Ok(()) => {
                        tracing::info!("Unauthorized signal received, clearing session");
                        store.logout();
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // 连续多个 401 合并处理即可，logout 本身幂等
                        tracing::debug!(skipped, "Unauthorized signal receiver lagged");
                        store.logout();
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
        UnauthorizedSubscription { handle }
    }

    fn publish(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!(?event, "No session event receivers");
        }
    }
}

/// 未授权信号订阅句柄
///
/// Drop 时终止监听任务
pub struct UnauthorizedSubscription {
    handle: JoinHandle<()>,
}

impl Drop for UnauthorizedSubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::Role;
    use crate::infrastructure::adapters::auth::FakeAuthGateway;
    use crate::infrastructure::events::UnauthorizedSignal;
    use crate::infrastructure::persistence::InMemorySessionStorage;

    fn user(role: Role) -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            role,
        }
    }

    fn store_with(
        auth: FakeAuthGateway,
        storage: Arc<InMemorySessionStorage>,
    ) -> Arc<SessionStore> {
        SessionStore::new(Arc::new(auth), storage).arc()
    }

    #[tokio::test]
    async fn test_hydrate_with_full_pair_reaches_authenticated() {
        let storage = InMemorySessionStorage::new().arc();
        storage
            .store(&PersistedSession {
                token: crate::domain::session::AuthToken::new("t1"),
                user: user(Role::Admin),
            })
            .unwrap();

        let store = store_with(FakeAuthGateway::accepting("a@b.com", "pw", user(Role::Admin)), storage);
        assert!(store.state().is_loading());

        store.hydrate();
        let state = store.state();
        assert!(state.is_authenticated());
        assert_eq!(state.user().unwrap().role, Role::Admin);
    }

    #[tokio::test]
    async fn test_hydrate_with_partial_pair_reaches_anonymous() {
        let storage = InMemorySessionStorage::new().arc();
        // 只有 token，没有 user
        storage.insert_raw(crate::application::ports::TOKEN_KEY, b"t1".to_vec());

        let store = store_with(FakeAuthGateway::accepting("a@b.com", "pw", user(Role::Admin)), storage);
        store.hydrate();
        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(!store.state().is_loading());
    }

    #[tokio::test]
    async fn test_hydrate_is_idempotent() {
        let storage = InMemorySessionStorage::new().arc();
        let store = store_with(FakeAuthGateway::accepting("a@b.com", "pw", user(Role::Admin)), storage.clone());
        store.hydrate();
        assert_eq!(store.state(), SessionState::Anonymous);

        // 第二次 hydrate 前写入凭证对，不应再被读取
        storage
            .store(&PersistedSession {
                token: crate::domain::session::AuthToken::new("t1"),
                user: user(Role::Admin),
            })
            .unwrap();
        store.hydrate();
        assert_eq!(store.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_login_success_persists_pair() {
        let storage = InMemorySessionStorage::new().arc();
        let store = store_with(
            FakeAuthGateway::accepting("a@b.com", "secret", user(Role::Driver)),
            storage.clone(),
        );
        store.hydrate();

        let outcome = store.login("a@b.com", "secret").await;
        assert!(outcome.success);
        assert!(outcome.message.is_none());
        assert!(store.is_authenticated());

        let persisted = storage.load().unwrap().unwrap();
        assert_eq!(persisted.user.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_login_failure_leaves_everything_untouched() {
        let storage = InMemorySessionStorage::new().arc();
        let store = store_with(
            FakeAuthGateway::accepting("a@b.com", "secret", user(Role::Driver)),
            storage.clone(),
        );
        store.hydrate();

        let outcome = store.login("a@b.com", "wrong").await;
        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("Invalid credentials"));
        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(storage.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_falls_back_when_server_has_no_message() {
        let storage = InMemorySessionStorage::new().arc();
        let store = store_with(
            FakeAuthGateway::accepting("a@b.com", "secret", user(Role::Driver))
                .without_reject_message(),
            storage,
        );
        store.hydrate();

        let outcome = store.login("a@b.com", "wrong").await;
        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let storage = InMemorySessionStorage::new().arc();
        let store = store_with(
            FakeAuthGateway::accepting("a@b.com", "secret", user(Role::Driver)),
            storage.clone(),
        );
        store.hydrate();
        store.login("a@b.com", "secret").await;
        assert!(store.is_authenticated());

        store.logout();
        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(storage.load().unwrap().is_none());

        // 再次登出：同样的终态，不报错
        store.logout();
        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(storage.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_refresh_success_replaces_user_and_keeps_token() {
        let storage = InMemorySessionStorage::new().arc();
        let auth = FakeAuthGateway::accepting("a@b.com", "secret", user(Role::Driver));
        let store = store_with(auth.clone(), storage.clone());
        store.hydrate();
        store.login("a@b.com", "secret").await;

        // 服务端把角色升级为 Admin
        auth.set_profile(user(Role::Admin));
        store.refresh().await;

        assert_eq!(store.current_user().unwrap().role, Role::Admin);
        let persisted = storage.load().unwrap().unwrap();
        assert_eq!(persisted.user.role, Role::Admin);
        assert_eq!(persisted.token.as_str(), "fake-token");
    }

    #[tokio::test]
    async fn test_refresh_failure_escalates_to_logout() {
        let storage = InMemorySessionStorage::new().arc();
        let auth = FakeAuthGateway::accepting("a@b.com", "secret", user(Role::Driver));
        let store = store_with(auth.clone(), storage.clone());
        store.hydrate();
        store.login("a@b.com", "secret").await;

        auth.fail_profile();
        store.refresh().await;

        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(storage.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_signal_clears_session() {
        let storage = InMemorySessionStorage::new().arc();
        let store = store_with(
            FakeAuthGateway::accepting("a@b.com", "secret", user(Role::Driver)),
            storage.clone(),
        );
        store.hydrate();
        store.login("a@b.com", "secret").await;

        let signal = UnauthorizedSignal::new();
        let _subscription = store.attach_unauthorized(signal.subscribe());
        let mut events = store.subscribe();

        signal.raise();
        let event = tokio::time::timeout(std::time::Duration::from_secs(1), events.recv())
            .await
            .expect("timed out waiting for session event")
            .unwrap();
        assert_eq!(event, SessionEvent::SignedOut);
        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(storage.load().unwrap().is_none());

        // 已经是 Anonymous 时再次触发信号不抛错、状态不变
        signal.raise();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert_eq!(store.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_dropped_subscription_stops_listening() {
        let storage = InMemorySessionStorage::new().arc();
        let store = store_with(
            FakeAuthGateway::accepting("a@b.com", "secret", user(Role::Driver)),
            storage,
        );
        store.hydrate();
        store.login("a@b.com", "secret").await;

        let signal = UnauthorizedSignal::new();
        let subscription = store.attach_unauthorized(signal.subscribe());
        drop(subscription);
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        signal.raise();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(store.is_authenticated());
    }
}
