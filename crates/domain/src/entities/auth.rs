//! 认证状态实体
//!
//! 认证流程本身（OAuth、令牌刷新）由外部模块完成，这里只描述它对外暴露的状态。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 登录状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoginStatus {
    /// 正在登录
    LoggingIn,
    /// 正在登出
    LoggingOut,
    /// 登出前的清理阶段
    BeforeLogout,
    /// 已登录
    LoggedIn,
    /// 已登出
    LoggedOut,
}

impl LoginStatus {
    /// 是否处于登录/登出的过渡阶段
    pub fn is_transitioning(&self) -> bool {
        matches!(
            self,
            LoginStatus::LoggingIn | LoginStatus::LoggingOut | LoginStatus::BeforeLogout
        )
    }
}

impl fmt::Display for LoginStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginStatus::LoggingIn => write!(f, "loggingIn"),
            LoginStatus::LoggingOut => write!(f, "loggingOut"),
            LoginStatus::BeforeLogout => write!(f, "beforeLogout"),
            LoginStatus::LoggedIn => write!(f, "loggedIn"),
            LoginStatus::LoggedOut => write!(f, "loggedOut"),
        }
    }
}

/// 认证状态快照
///
/// `logged_in` 只有在 `ready` 为 true 时才有意义。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub ready: bool,
    pub logged_in: bool,
    pub login_status: LoginStatus,
}

impl AuthState {
    /// 尚未就绪的初始状态
    pub fn pending() -> Self {
        Self {
            ready: false,
            logged_in: false,
            login_status: LoginStatus::LoggedOut,
        }
    }

    /// 按登录状态构造已就绪的快照
    pub fn settled(login_status: LoginStatus) -> Self {
        Self {
            ready: true,
            logged_in: login_status == LoginStatus::LoggedIn,
            login_status,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::pending()
    }
}
