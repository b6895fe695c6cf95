//! 领域实体定义
//!
//! 包含客户端编排层读取的状态快照：认证、路由、群组、联系人、消息和桌面通知。

pub mod auth;
pub mod group;
pub mod notification;
pub mod person;
pub mod post;
pub mod route;

// 重新导出核心实体
pub use auth::{AuthState, LoginStatus};
pub use group::GroupsState;
pub use notification::DesktopNotification;
pub use person::Person;
pub use post::IncomingPost;
pub use route::RoutePath;
