//! 群组（会话）状态实体

use serde::{Deserialize, Serialize};

use crate::value_objects::GroupId;

/// 群组状态快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupsState {
    /// 群组数据是否已加载完成
    pub ready: bool,
    /// 用户当前正在查看的群组
    pub current_group_id: Option<GroupId>,
}

impl GroupsState {
    /// 用户是否正在查看指定群组
    pub fn is_viewing(&self, group_id: &GroupId) -> bool {
        self.current_group_id.as_ref() == Some(group_id)
    }
}
