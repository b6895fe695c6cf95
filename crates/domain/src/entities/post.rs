//! 新消息事件

use serde::{Deserialize, Serialize};

use crate::value_objects::{GroupId, PersonId, PostId};

/// 收到的新消息，只在事件流中短暂存在，不会被存储
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingPost {
    pub id: PostId,
    pub group_id: GroupId,
    pub creator_id: PersonId,
    pub text: String,
}

impl IncomingPost {
    pub fn new(
        id: impl Into<PostId>,
        group_id: impl Into<GroupId>,
        creator_id: impl Into<PersonId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            creator_id: creator_id.into(),
            text: text.into(),
        }
    }
}
