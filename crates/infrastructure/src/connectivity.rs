//! 网络连通性状态

use std::sync::atomic::{AtomicBool, Ordering};

use application::{ConnectivityProvider, EventBus, StateChange};

pub struct InMemoryConnectivity {
    connected: AtomicBool,
    changes: EventBus<StateChange>,
}

impl InMemoryConnectivity {
    /// 默认认为网络可用
    pub fn new(changes: EventBus<StateChange>) -> Self {
        Self {
            connected: AtomicBool::new(true),
            changes,
        }
    }

    pub fn set_connectivity(&self, connected: bool) {
        if self.connected.swap(connected, Ordering::AcqRel) != connected {
            tracing::info!(connected, "网络连通性变化");
            self.changes.publish(StateChange::Connectivity);
        }
    }
}

impl ConnectivityProvider for InMemoryConnectivity {
    fn connectivity(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_publishes_only_on_change() {
        let changes = EventBus::new(4);
        let mut receiver = changes.subscribe();
        let connectivity = InMemoryConnectivity::new(changes);

        connectivity.set_connectivity(true);
        assert!(receiver.try_recv().is_err());

        connectivity.set_connectivity(false);
        assert!(!connectivity.connectivity());
        assert_eq!(receiver.try_recv().unwrap(), StateChange::Connectivity);
    }
}
