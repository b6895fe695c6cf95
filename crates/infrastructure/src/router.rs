//! 路由状态的内存实现

use std::sync::{PoisonError, RwLock};

use application::{ApplicationError, EventBus, Router, StateChange};
use domain::RoutePath;

pub struct InMemoryRouter {
    current: RwLock<RoutePath>,
    changes: EventBus<StateChange>,
}

impl InMemoryRouter {
    /// 从入口页开始
    pub fn new(changes: EventBus<StateChange>) -> Self {
        Self {
            current: RwLock::new(RoutePath::root()),
            changes,
        }
    }
}

impl Router for InMemoryRouter {
    fn current_path(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .to_string()
    }

    fn push(&self, path: &str) -> Result<(), ApplicationError> {
        let next = RoutePath::parse(path)?;
        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            if *current == next {
                return Ok(());
            }
            *current = next;
        }
        tracing::debug!(path, "路由变化");
        self.changes.publish(StateChange::Route);
        Ok(())
    }
}
