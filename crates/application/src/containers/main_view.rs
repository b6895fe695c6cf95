use std::sync::Arc;

use domain::{Person, RoutePath};
use serde::Serialize;

use crate::error::ApplicationError;
use crate::providers::{PersonsProvider, Router};

/// 侧边栏菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub active_icon: &'static str,
}

impl Menu {
    /// 当前路径包含菜单路径时视为选中
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path.contains(self.path)
    }
}

pub const GLIP_MENU: Menu = Menu {
    name: "Glip",
    path: RoutePath::GLIP,
    icon: "ComposeText.svg",
    active_icon: "ComposeTextHover.svg",
};

pub const SETTINGS_MENU: Menu = Menu {
    name: "Settings",
    path: RoutePath::SETTINGS,
    icon: "MoreMenu.svg",
    active_icon: "MoreMenuHover.svg",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainViewProps {
    pub menus: Vec<Menu>,
    pub setting_menu: Menu,
    pub me: Option<Person>,
    pub current_path: String,
}

pub struct MainViewDependencies {
    pub router: Arc<dyn Router>,
    pub persons: Arc<dyn PersonsProvider>,
}

pub struct MainView {
    deps: MainViewDependencies,
}

impl MainView {
    pub fn new(deps: MainViewDependencies) -> Self {
        Self { deps }
    }

    pub fn props(&self) -> MainViewProps {
        MainViewProps {
            menus: vec![GLIP_MENU],
            setting_menu: SETTINGS_MENU,
            me: self.deps.persons.me(),
            current_path: self.deps.router.current_path(),
        }
    }

    /// 没有菜单或菜单没有路径时什么都不做
    pub fn on_select_menu(&self, menu: Option<&Menu>) -> Result<(), ApplicationError> {
        match menu {
            Some(menu) if !menu.path.is_empty() => self.deps.router.push(menu.path),
            _ => Ok(()),
        }
    }

    pub fn on_click_avatar(&self) -> Result<(), ApplicationError> {
        self.deps.router.push(RoutePath::MY_PROFILE)
    }
}
