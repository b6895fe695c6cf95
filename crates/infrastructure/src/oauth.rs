//! OAuth 登录页状态
//!
//! 登录页本身由外部窗口承载，这里只记录是否可以打开登录页，并在打开时把认证状态切到登录中。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use application::{EventBus, OAuthProvider, StateChange};
use domain::LoginStatus;

use crate::auth::InMemoryAuth;

pub struct InMemoryOAuth {
    ready: AtomicBool,
    redirect_uri: String,
    auth: Arc<InMemoryAuth>,
    changes: EventBus<StateChange>,
}

impl InMemoryOAuth {
    pub fn new(
        redirect_uri: impl Into<String>,
        auth: Arc<InMemoryAuth>,
        changes: EventBus<StateChange>,
    ) -> Self {
        Self {
            ready: AtomicBool::new(false),
            redirect_uri: redirect_uri.into(),
            auth,
            changes,
        }
    }

    fn set_ready(&self, ready: bool) {
        if self.ready.swap(ready, Ordering::AcqRel) != ready {
            self.changes.publish(StateChange::OAuth);
        }
    }
}

impl OAuthProvider for InMemoryOAuth {
    fn oauth_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn setup_oauth(&self) {
        self.set_ready(true);
    }

    fn destroy_oauth(&self) {
        self.set_ready(false);
    }

    fn open_oauth_page(&self) {
        if !self.oauth_ready() {
            tracing::warn!("OAuth 尚未就绪，忽略登录请求");
            return;
        }
        tracing::info!(redirect_uri = %self.redirect_uri, "打开 OAuth 登录页");
        self.auth.set_login_status(LoginStatus::LoggingIn);
    }
}
