//! 容器组件
//!
//! 把状态提供者的状态映射为视图组件需要的 props 和回调，视图本身由外部组件库提供。

mod main_view;
mod welcome_page;

pub use main_view::{MainView, MainViewDependencies, MainViewProps, Menu, GLIP_MENU, SETTINGS_MENU};
pub use welcome_page::{WelcomePage, WelcomePageDependencies, WelcomePageProps};
