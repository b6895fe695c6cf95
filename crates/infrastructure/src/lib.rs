//! 基础设施层实现。
//!
//! 提供内存状态提供者、桌面通知出口、限流器以及模块装配器，实现应用层定义的契约。
//! 每个状态提供者在状态真正改变后发布一条 `StateChange` 事件。

pub mod auth;
pub mod builder;
pub mod connectivity;
pub mod groups;
pub mod locale;
pub mod notifier;
pub mod oauth;
pub mod persons;
pub mod rate_limiter;
pub mod router;

pub use auth::InMemoryAuth;
pub use builder::{Infrastructure, InfrastructureError};
pub use connectivity::InMemoryConnectivity;
pub use groups::InMemoryGroups;
pub use locale::InMemoryLocale;
pub use notifier::DesktopNotifier;
pub use oauth::InMemoryOAuth;
pub use persons::InMemoryPersons;
pub use rate_limiter::ThrottleLimiter;
pub use router::InMemoryRouter;
