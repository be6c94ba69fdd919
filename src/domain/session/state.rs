//! Session Context - 会话状态机
//!
//! 用带标签的三态枚举取代 loading 布尔值 + 可空 user 的组合，
//! "loading=false 但 user 未初始化" 之类的非法组合在类型上不可表达

use super::UserProfile;

/// 会话状态
///
/// 状态转移:
/// - Hydrating --(存储中存在完整凭证对)--> Authenticated
/// - Hydrating --(凭证对缺失或不完整)--> Anonymous
/// - Anonymous --(登录成功)--> Authenticated
/// - Authenticated --(登出 | 未授权信号 | 刷新失败)--> Anonymous
/// - Authenticated --(刷新成功)--> Authenticated (user 被替换)
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// 启动时正在从持久化存储恢复会话
    Hydrating,
    /// 已登录
    Authenticated(UserProfile),
    /// 未登录
    Anonymous,
}

impl SessionState {
    /// 是否仍在恢复阶段（对应原 loading 标志）
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Hydrating)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// 当前用户（未登录或恢复中为 None）
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::Role;

    fn user() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            first_name: None,
            last_name: None,
            role: Role::Driver,
        }
    }

    #[test]
    fn test_hydrating_is_loading() {
        assert!(SessionState::Hydrating.is_loading());
        assert!(!SessionState::Anonymous.is_loading());
        assert!(!SessionState::Authenticated(user()).is_loading());
    }

    #[test]
    fn test_user_only_when_authenticated() {
        assert!(SessionState::Hydrating.user().is_none());
        assert!(SessionState::Anonymous.user().is_none());

        let state = SessionState::Authenticated(user());
        assert!(state.is_authenticated());
        assert_eq!(state.user().unwrap().id, "u1");
    }
}
