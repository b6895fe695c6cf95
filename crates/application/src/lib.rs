//! 应用层实现。
//!
//! 这里是客户端的编排核心：订阅新消息事件和状态变化事件，决定何时弹出桌面通知、
//! 何时把用户重定向到别的页面，并为视图层提供容器组件的 props 和回调。
//! 所有状态都由外部状态提供者持有，本层只读取它们并调用约定好的命令。

pub mod containers;
pub mod error;
pub mod events;
pub mod local_bus;
pub mod navigation;
pub mod notification;
pub mod orchestrator;
pub mod providers;

pub use containers::{
    MainView, MainViewDependencies, MainViewProps, Menu, WelcomePage, WelcomePageDependencies,
    WelcomePageProps,
};
pub use error::ApplicationError;
pub use events::StateChange;
pub use local_bus::EventBus;
pub use navigation::{NavigationReconciler, NavigationSnapshot};
pub use notification::{ClickHandler, NotificationDecider, NotificationRequest, PostOutcome};
pub use orchestrator::{Orchestrator, OrchestratorDependencies};
pub use providers::{
    AuthProvider, ConnectivityProvider, GroupsProvider, LocaleProvider, Notifier, OAuthProvider,
    PersonsProvider, Router, ThrottleProvider,
};
