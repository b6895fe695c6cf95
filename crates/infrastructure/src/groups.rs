//! 群组状态的内存实现

use std::sync::{PoisonError, RwLock};

use application::{ApplicationError, EventBus, GroupsProvider, StateChange};
use domain::{GroupId, GroupsState};

pub struct InMemoryGroups {
    state: RwLock<GroupsState>,
    changes: EventBus<StateChange>,
}

impl InMemoryGroups {
    pub fn new(changes: EventBus<StateChange>) -> Self {
        Self {
            state: RwLock::new(GroupsState::default()),
            changes,
        }
    }

    /// 群组列表加载完成
    pub fn set_ready(&self, ready: bool) {
        self.modify(|state| {
            let changed = state.ready != ready;
            state.ready = ready;
            changed
        });
    }

    fn modify(&self, apply: impl FnOnce(&mut GroupsState) -> bool) {
        let changed = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            apply(&mut state)
        };
        if changed {
            self.changes.publish(StateChange::Groups);
        }
    }
}

impl GroupsProvider for InMemoryGroups {
    fn state(&self) -> GroupsState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update_current_group_id(&self, group_id: GroupId) -> Result<(), ApplicationError> {
        let group_id = GroupId::parse(group_id.as_str())?;
        tracing::debug!(group_id = %group_id, "切换当前群组");
        self.modify(|state| {
            if state.current_group_id.as_ref() == Some(&group_id) {
                return false;
            }
            state.current_group_id = Some(group_id);
            true
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;

    #[test]
    fn switching_to_the_same_group_twice_publishes_once() {
        let changes = EventBus::new(4);
        let mut receiver = changes.subscribe();
        let groups = InMemoryGroups::new(changes);

        groups.update_current_group_id(GroupId::from("g1")).unwrap();
        groups.update_current_group_id(GroupId::from("g1")).unwrap();

        assert_eq!(groups.state().current_group_id, Some(GroupId::from("g1")));
        assert_eq!(receiver.try_recv().unwrap(), StateChange::Groups);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn ready_flag_publishes_only_on_change() {
        let changes = EventBus::new(4);
        let mut receiver = changes.subscribe();
        let groups = InMemoryGroups::new(changes);

        groups.set_ready(true);
        groups.set_ready(true);

        assert!(groups.state().ready);
        assert_eq!(receiver.try_recv().unwrap(), StateChange::Groups);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn blank_group_id_is_rejected() {
        let changes = EventBus::new(4);
        let mut receiver = changes.subscribe();
        let groups = InMemoryGroups::new(changes);
        groups.update_current_group_id(GroupId::from("g1")).unwrap();
        let _ = receiver.try_recv();

        let result = groups.update_current_group_id(GroupId::from(""));

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::ValidationError { .. }))
        ));
        assert_eq!(groups.state().current_group_id, Some(GroupId::from("g1")));
        assert!(receiver.try_recv().is_err());
    }
}
