//! 桌面通知出口
//!
//! 显示通知由宿主平台完成，这里负责记录日志并保留最近通知的点击回调，
//! 平台在用户点击时通过 [`DesktopNotifier::click`] 回调。

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use application::{ApplicationError, Notifier, NotificationRequest};
use domain::DesktopNotification;
use uuid::Uuid;

pub struct DesktopNotifier {
    max_pending: usize,
    pending: Mutex<VecDeque<NotificationRequest>>,
}

impl DesktopNotifier {
    pub fn new(max_pending: usize) -> Self {
        Self {
            max_pending: max_pending.max(1),
            pending: Mutex::new(VecDeque::new()),
        }
    }

    /// 触发指定通知的点击回调，通知已过期时返回 false。
    ///
    /// 同一条通知可以被点击多次。
    pub fn click(&self, id: Uuid) -> bool {
        let handler = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|request| request.notification.id == id)
            .map(|request| request.on_click.clone());

        match handler {
            Some(handler) => {
                tracing::debug!(notification_id = %id, "通知被点击");
                handler();
                true
            }
            None => false,
        }
    }

    pub fn pending(&self) -> Vec<DesktopNotification> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|request| request.notification.clone())
            .collect()
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, request: NotificationRequest) -> Result<(), ApplicationError> {
        let notification = &request.notification;
        tracing::info!(
            notification_id = %notification.id,
            title = notification.title.as_deref().unwrap_or_default(),
            text = %notification.text,
            "显示桌面通知"
        );

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.push_back(request);
        while pending.len() > self.max_pending {
            pending.pop_front();
        }
        Ok(())
    }
}
