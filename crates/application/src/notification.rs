//! 新消息桌面通知
//!
//! 用户正在查看消息所在群组时不打扰；否则弹出一条通知，点击后切换到该群组。

use std::fmt;
use std::sync::Arc;

use domain::{DesktopNotification, IncomingPost};
use uuid::Uuid;

use crate::providers::{GroupsProvider, Notifier, PersonsProvider};

/// 通知点击回调，平台可能调用零次或多次
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// 交给通知出口的显示命令
#[derive(Clone)]
pub struct NotificationRequest {
    pub notification: DesktopNotification,
    pub on_click: ClickHandler,
}

impl NotificationRequest {
    pub fn new(notification: DesktopNotification, on_click: ClickHandler) -> Self {
        Self {
            notification,
            on_click,
        }
    }

    /// 模拟用户点击通知
    pub fn click(&self) {
        (self.on_click)();
    }
}

impl fmt::Debug for NotificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRequest")
            .field("notification", &self.notification)
            .finish_non_exhaustive()
    }
}

/// 单条新消息的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOutcome {
    /// 用户正在查看该群组，不弹通知
    Suppressed,
    /// 已发出通知
    Notified(Uuid),
    /// 通知出口失败，已记录日志
    Dropped,
}

pub struct NotificationDecider {
    groups: Arc<dyn GroupsProvider>,
    persons: Arc<dyn PersonsProvider>,
    notifier: Arc<dyn Notifier>,
}

impl NotificationDecider {
    pub fn new(
        groups: Arc<dyn GroupsProvider>,
        persons: Arc<dyn PersonsProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            groups,
            persons,
            notifier,
        }
    }

    pub fn handle_new_post(&self, post: &IncomingPost) -> PostOutcome {
        if self.groups.state().is_viewing(&post.group_id) {
            tracing::debug!(post_id = %post.id, group_id = %post.group_id, "正在查看该群组，跳过通知");
            return PostOutcome::Suppressed;
        }

        // 发送者可能不在本地缓存中，此时通知只保留正文
        let creator = self.persons.person(&post.creator_id);
        let notification = DesktopNotification::new(
            creator.as_ref().map(|person| person.first_name.clone()),
            post.text.clone(),
            creator.and_then(|person| person.avatar),
        );
        let notification_id = notification.id;

        let groups = Arc::clone(&self.groups);
        let group_id = post.group_id.clone();
        let on_click: ClickHandler = Arc::new(move || {
            if let Err(err) = groups.update_current_group_id(group_id.clone()) {
                tracing::warn!(group_id = %group_id, error = %err, "切换当前群组失败");
            }
        });

        match self
            .notifier
            .notify(NotificationRequest::new(notification, on_click))
        {
            Ok(()) => {
                tracing::info!(
                    post_id = %post.id,
                    group_id = %post.group_id,
                    notification_id = %notification_id,
                    "已发出新消息通知"
                );
                PostOutcome::Notified(notification_id)
            }
            Err(err) => {
                tracing::warn!(post_id = %post.id, error = %err, "桌面通知发送失败");
                PostOutcome::Dropped
            }
        }
    }
}
