//! Fake Auth Gateway - 用于测试的认证网关
//!
//! 预置一组可接受的账号与固定 token，不访问网络；
//! 可在运行中切换资料内容或让资料接口失败

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::application::ports::{AuthError, AuthGatewayPort, LoginResponse, RegisterRequest};
use crate::domain::session::{AuthToken, UserProfile};

/// 固定返回的 token
const FAKE_TOKEN: &str = "fake-token";

struct Inner {
    email: String,
    password: String,
    profile: Mutex<UserProfile>,
    reject_message: Option<String>,
    profile_fails: AtomicBool,
}

/// Fake 认证网关
///
/// Clone 共享同一内部状态
#[derive(Clone)]
pub struct FakeAuthGateway {
    inner: Arc<Inner>,
}

impl FakeAuthGateway {
    /// 接受给定账号，登录成功返回 user
    pub fn accepting(email: impl Into<String>, password: impl Into<String>, user: UserProfile) -> Self {
        Self {
            inner: Arc::new(Inner {
                email: email.into(),
                password: password.into(),
                profile: Mutex::new(user),
                reject_message: Some("Invalid credentials".to_string()),
                profile_fails: AtomicBool::new(false),
            }),
        }
    }

    /// 拒绝登录时不携带服务端 message（测试兜底文案用）
    pub fn without_reject_message(self) -> Self {
        let inner = Arc::new(Inner {
            email: self.inner.email.clone(),
            password: self.inner.password.clone(),
            profile: Mutex::new(self.inner.profile.lock().clone()),
            reject_message: None,
            profile_fails: AtomicBool::new(self.inner.profile_fails.load(Ordering::Relaxed)),
        });
        Self { inner }
    }

    /// 替换后续 fetch_profile 返回的资料
    pub fn set_profile(&self, user: UserProfile) {
        *self.inner.profile.lock() = user;
    }

    /// 让后续 fetch_profile 以 500 失败
    pub fn fail_profile(&self) {
        self.inner.profile_fails.store(true, Ordering::Relaxed);
    }
}

#[async_trait]
impl AuthGatewayPort for FakeAuthGateway {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        if email == self.inner.email && password == self.inner.password {
            Ok(LoginResponse {
                token: AuthToken::new(FAKE_TOKEN),
                user: self.inner.profile.lock().clone(),
            })
        } else {
            Err(AuthError::Rejected {
                status: 401,
                message: self.inner.reject_message.clone(),
            })
        }
    }

    async fn fetch_profile(&self) -> Result<UserProfile, AuthError> {
        if self.inner.profile_fails.load(Ordering::Relaxed) {
            return Err(AuthError::Rejected {
                status: 500,
                message: None,
            });
        }
        Ok(self.inner.profile.lock().clone())
    }

    async fn register(&self, request: RegisterRequest) -> Result<UserProfile, AuthError> {
        Ok(UserProfile {
            id: "registered".to_string(),
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            role: request.role,
        })
    }
}
