//! 登录后的路由纠正
//!
//! 每次相关状态变化后重新计算目标路由。决策是当前状态的纯函数，
//! 重复跳转到同一路径对路由器是无副作用的，因此不需要记录"是否已经跳转过"。

use std::sync::Arc;

use domain::{GroupId, RoutePath};

use crate::error::ApplicationError;
use crate::providers::{AuthProvider, GroupsProvider, Router};

/// 导航决策的全部输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub auth_ready: bool,
    pub logged_in: bool,
    pub current_path: String,
    pub groups_ready: bool,
    pub current_group_id: Option<GroupId>,
}

pub struct NavigationReconciler {
    auth: Arc<dyn AuthProvider>,
    router: Arc<dyn Router>,
    groups: Arc<dyn GroupsProvider>,
}

impl NavigationReconciler {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        router: Arc<dyn Router>,
        groups: Arc<dyn GroupsProvider>,
    ) -> Self {
        Self {
            auth,
            router,
            groups,
        }
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        let auth = self.auth.state();
        let groups = self.groups.state();
        NavigationSnapshot {
            auth_ready: auth.ready,
            logged_in: auth.logged_in,
            current_path: self.router.current_path(),
            groups_ready: groups.ready,
            current_group_id: groups.current_group_id,
        }
    }

    /// 按顺序匹配规则，第一条命中的规则生效
    pub fn decide(snapshot: &NavigationSnapshot) -> Option<RoutePath> {
        if !snapshot.auth_ready {
            return None;
        }

        let path = snapshot.current_path.as_str();
        if path != RoutePath::ROOT && !snapshot.logged_in {
            return Some(RoutePath::root());
        }

        if (path == RoutePath::ROOT || path == RoutePath::GLIP)
            && snapshot.logged_in
            && snapshot.groups_ready
        {
            let group_id = snapshot
                .current_group_id
                .as_ref()
                .filter(|group_id| !group_id.is_blank());
            return Some(match group_id {
                Some(group_id) => RoutePath::group(group_id),
                None => RoutePath::my_profile(),
            });
        }

        None
    }

    /// 读取当前状态并最多执行一次跳转；路由器的错误直接返回给调用方
    pub fn reconcile(&self) -> Result<Option<RoutePath>, ApplicationError> {
        let snapshot = self.snapshot();
        let Some(target) = Self::decide(&snapshot) else {
            return Ok(None);
        };

        tracing::info!(from = %snapshot.current_path, to = %target, "重定向");
        self.router.push(target.as_str())?;
        Ok(Some(target))
    }
}
