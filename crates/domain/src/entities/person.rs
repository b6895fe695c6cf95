//! 联系人实体

use serde::{Deserialize, Serialize};

use crate::value_objects::PersonId;

/// 联系人（消息发送者或当前用户本人）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    /// 头像地址
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Person {
    pub fn new(id: impl Into<PersonId>, first_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: None,
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}
