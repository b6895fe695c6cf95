//! 模块装配
//!
//! 按依赖顺序一次性构造所有状态提供者，得到一组不可变的共享组件，
//! 再由它们构造编排器和容器组件。

use std::sync::Arc;
use std::time::Duration;

use application::{
    EventBus, MainView, MainViewDependencies, Orchestrator, OrchestratorDependencies,
    StateChange, WelcomePage, WelcomePageDependencies,
};
use config::{AppConfig, AppInfo, ConfigError};
use domain::IncomingPost;
use thiserror::Error;

use crate::{
    auth::InMemoryAuth, connectivity::InMemoryConnectivity, groups::InMemoryGroups,
    locale::InMemoryLocale, notifier::DesktopNotifier, oauth::InMemoryOAuth,
    persons::InMemoryPersons, rate_limiter::ThrottleLimiter, router::InMemoryRouter,
};

#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Clone)]
pub struct Infrastructure {
    pub app: AppInfo,
    pub posts: EventBus<IncomingPost>,
    pub changes: EventBus<StateChange>,
    pub auth: Arc<InMemoryAuth>,
    pub router: Arc<InMemoryRouter>,
    pub groups: Arc<InMemoryGroups>,
    pub persons: Arc<InMemoryPersons>,
    pub connectivity: Arc<InMemoryConnectivity>,
    pub locale: Arc<InMemoryLocale>,
    pub throttle: Arc<ThrottleLimiter>,
    pub oauth: Arc<InMemoryOAuth>,
    pub notifier: Arc<DesktopNotifier>,
}

impl Infrastructure {
    pub fn assemble(config: &AppConfig) -> Result<Self, InfrastructureError> {
        config.validate_all()?;

        let capacity = config.events.channel_capacity;
        let posts = EventBus::new(capacity);
        let changes = EventBus::new(capacity);

        let auth = Arc::new(InMemoryAuth::new(changes.clone()));
        let router = Arc::new(InMemoryRouter::new(changes.clone()));
        let groups = Arc::new(InMemoryGroups::new(changes.clone()));
        let persons = Arc::new(InMemoryPersons::new(changes.clone()));
        let connectivity = Arc::new(InMemoryConnectivity::new(changes.clone()));
        let locale = Arc::new(InMemoryLocale::new(config.locale.default_locale.clone()));
        let throttle = Arc::new(ThrottleLimiter::new(
            Duration::from_secs(config.rate_limiter.throttle_duration_secs),
            changes.clone(),
        ));
        let oauth = Arc::new(InMemoryOAuth::new(
            config.redirect_uri.clone(),
            auth.clone(),
            changes.clone(),
        ));
        let notifier = Arc::new(DesktopNotifier::new(config.notifications.max_pending));

        tracing::debug!(capacity, "模块装配完成");

        Ok(Self {
            app: config.app.clone(),
            posts,
            changes,
            auth,
            router,
            groups,
            persons,
            connectivity,
            locale,
            throttle,
            oauth,
            notifier,
        })
    }

    pub fn orchestrator(&self) -> Orchestrator {
        Orchestrator::new(OrchestratorDependencies {
            app: self.app.clone(),
            auth: self.auth.clone(),
            router: self.router.clone(),
            groups: self.groups.clone(),
            persons: self.persons.clone(),
            notifier: self.notifier.clone(),
            posts: self.posts.clone(),
            changes: self.changes.clone(),
        })
    }

    pub fn welcome_page(&self) -> WelcomePage {
        WelcomePage::new(WelcomePageDependencies {
            auth: self.auth.clone(),
            locale: self.locale.clone(),
            throttle: self.throttle.clone(),
            connectivity: self.connectivity.clone(),
            oauth: self.oauth.clone(),
            version: self.app.version.clone(),
        })
    }

    pub fn main_view(&self) -> MainView {
        MainView::new(MainViewDependencies {
            router: self.router.clone(),
            persons: self.persons.clone(),
        })
    }
}
