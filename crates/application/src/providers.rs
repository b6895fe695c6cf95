//! 外部状态提供者契约
//!
//! 每个提供者暴露一块只读状态和少量命令。所有调用都是同步的内存操作，
//! 实现方在状态真正改变后负责发布 [`crate::StateChange`] 事件。

use domain::{AuthState, GroupId, GroupsState, Person, PersonId};

use crate::error::ApplicationError;
use crate::notification::NotificationRequest;

/// 认证状态
#[cfg_attr(test, mockall::automock)]
pub trait AuthProvider: Send + Sync {
    fn state(&self) -> AuthState;
}

/// 路由器
#[cfg_attr(test, mockall::automock)]
pub trait Router: Send + Sync {
    fn current_path(&self) -> String;

    /// 跳转到指定路径，跳转到当前路径时不产生任何变化
    fn push(&self, path: &str) -> Result<(), ApplicationError>;
}

/// 群组状态
#[cfg_attr(test, mockall::automock)]
pub trait GroupsProvider: Send + Sync {
    fn state(&self) -> GroupsState;

    /// 切换当前正在查看的群组
    fn update_current_group_id(&self, group_id: GroupId) -> Result<(), ApplicationError>;
}

/// 联系人缓存
#[cfg_attr(test, mockall::automock)]
pub trait PersonsProvider: Send + Sync {
    /// 本地缓存中找不到时返回 None
    fn person(&self, id: &PersonId) -> Option<Person>;

    /// 当前用户本人
    fn me(&self) -> Option<Person>;
}

/// 桌面通知出口
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, request: NotificationRequest) -> Result<(), ApplicationError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait LocaleProvider: Send + Sync {
    fn current_locale(&self) -> String;
}

/// 接口被限流时为 true
#[cfg_attr(test, mockall::automock)]
pub trait ThrottleProvider: Send + Sync {
    fn throttling(&self) -> bool;
}

#[cfg_attr(test, mockall::automock)]
pub trait ConnectivityProvider: Send + Sync {
    fn connectivity(&self) -> bool;
}

/// OAuth 登录流程
#[cfg_attr(test, mockall::automock)]
pub trait OAuthProvider: Send + Sync {
    fn oauth_ready(&self) -> bool;
    fn setup_oauth(&self);
    fn destroy_oauth(&self);
    fn open_oauth_page(&self);
}
