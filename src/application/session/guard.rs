//! Route Guard - 受保护路由的渲染决策
//!
//! 决策只依赖会话快照与路由的角色要求；跳转到登录入口时
//! 不保留原始目标地址（与既有产品行为一致）。

use std::sync::Arc;

use crate::domain::session::{Role, SessionState};

use super::store::SessionStore;

/// 路由决策
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// 会话尚未恢复完成：渲染占位内容，不做任何跳转
    Wait,
    /// 未登录：跳转登录入口
    RedirectToLogin,
    /// 已登录但角色不满足要求：跳转默认主页
    RedirectToHome,
    /// 渲染受保护内容
    Render,
}

/// 路由守卫
pub struct RouteGuard {
    store: Arc<SessionStore>,
}

impl RouteGuard {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// 对当前会话状态做出决策
    pub fn decide(&self, required_role: Option<Role>) -> RouteDecision {
        Self::evaluate(&self.store.state(), required_role)
    }

    /// 决策核心（纯函数）
    ///
    /// 角色要求与用户角色都是解析后的枚举，比较天然大小写无关
    pub fn evaluate(state: &SessionState, required_role: Option<Role>) -> RouteDecision {
        match state {
            SessionState::Hydrating => RouteDecision::Wait,
            SessionState::Anonymous => RouteDecision::RedirectToLogin,
            SessionState::Authenticated(user) => match required_role {
                Some(role) if user.role != role => RouteDecision::RedirectToHome,
                _ => RouteDecision::Render,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::UserProfile;

    fn authenticated(role: Role) -> SessionState {
        SessionState::Authenticated(UserProfile {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            first_name: None,
            last_name: None,
            role,
        })
    }

    #[test]
    fn test_hydrating_never_redirects() {
        assert_eq!(
            RouteGuard::evaluate(&SessionState::Hydrating, None),
            RouteDecision::Wait
        );
        assert_eq!(
            RouteGuard::evaluate(&SessionState::Hydrating, Some(Role::Admin)),
            RouteDecision::Wait
        );
    }

    #[test]
    fn test_anonymous_redirects_to_login() {
        assert_eq!(
            RouteGuard::evaluate(&SessionState::Anonymous, None),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(
            RouteGuard::evaluate(&SessionState::Anonymous, Some(Role::Admin)),
            RouteDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_authenticated_without_role_requirement_renders() {
        assert_eq!(
            RouteGuard::evaluate(&authenticated(Role::Driver), None),
            RouteDecision::Render
        );
    }

    #[test]
    fn test_role_mismatch_redirects_home_not_login() {
        // 持久化中的 "driver"（任意大小写）撞上 Admin 专属路由
        let state = SessionState::Authenticated(
            serde_json::from_str(r#"{"id": "u1", "email": "a@b.com", "role": "driver"}"#).unwrap(),
        );
        assert_eq!(
            RouteGuard::evaluate(&state, Some(Role::Admin)),
            RouteDecision::RedirectToHome
        );
    }

    #[test]
    fn test_role_match_is_case_insensitive_end_to_end() {
        // 后端返回大写开头，要求方用解析出的枚举，比较不受大小写影响
        let state = SessionState::Authenticated(
            serde_json::from_str(r#"{"id": "u1", "email": "a@b.com", "role": "ADMIN"}"#).unwrap(),
        );
        assert_eq!(
            RouteGuard::evaluate(&state, Some(Role::Admin)),
            RouteDecision::Render
        );
    }
}
