//! 桌面通知实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 桌面通知
///
/// 发送者未知时 `title` 和 `icon` 为空，`text` 始终保留原始消息内容。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopNotification {
    /// 通知ID
    pub id: Uuid,
    /// 通知标题（发送者名字）
    pub title: Option<String>,
    /// 通知内容
    pub text: String,
    /// 图标（发送者头像）
    pub icon: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl DesktopNotification {
    /// 创建新通知
    pub fn new(title: Option<String>, text: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            text: text.into(),
            icon,
            created_at: Utc::now(),
        }
    }
}
