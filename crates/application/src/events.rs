//! 状态变化事件
//!
//! 每个状态提供者在状态真正改变后发布一个对应的事件，订阅者据此只关注自己依赖的那部分状态。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateChange {
    Auth,
    Route,
    Groups,
    Persons,
    Connectivity,
    OAuth,
    Throttle,
}

impl StateChange {
    /// 导航决策只依赖认证、路由和群组状态
    pub fn affects_navigation(&self) -> bool {
        matches!(
            self,
            StateChange::Auth | StateChange::Route | StateChange::Groups
        )
    }
}
