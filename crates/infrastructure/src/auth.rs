//! 认证状态的内存实现
//!
//! 真正的 OAuth/令牌流程由外部 SDK 完成，SDK 回调时通过这里更新状态。

use std::sync::{PoisonError, RwLock};

use application::{AuthProvider, EventBus, StateChange};
use domain::{AuthState, LoginStatus};

pub struct InMemoryAuth {
    state: RwLock<AuthState>,
    changes: EventBus<StateChange>,
}

impl InMemoryAuth {
    pub fn new(changes: EventBus<StateChange>) -> Self {
        Self {
            state: RwLock::new(AuthState::pending()),
            changes,
        }
    }

    /// 认证模块完成初始化
    pub fn mark_ready(&self, login_status: LoginStatus) {
        self.replace(AuthState::settled(login_status));
    }

    pub fn set_login_status(&self, login_status: LoginStatus) {
        let ready = self.state().ready;
        self.replace(AuthState {
            ready,
            logged_in: login_status == LoginStatus::LoggedIn,
            login_status,
        });
    }

    fn replace(&self, next: AuthState) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            if *state == next {
                return;
            }
            *state = next;
        }
        tracing::debug!(ready = next.ready, login_status = %next.login_status, "认证状态变化");
        self.changes.publish(StateChange::Auth);
    }
}

impl AuthProvider for InMemoryAuth {
    fn state(&self) -> AuthState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}
