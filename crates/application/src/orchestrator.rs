//! 客户端编排器
//!
//! 进程内只构造一次，持有所有状态提供者的引用。`initialize` 安装两个订阅：
//! 新消息事件交给 [`NotificationDecider`]，状态变化事件交给 [`NavigationReconciler`]。
//! 每个订阅在独立任务中串行处理事件，订阅在进程生命周期内不会被取消。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use config::AppInfo;
use domain::IncomingPost;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::error::ApplicationError;
use crate::events::StateChange;
use crate::local_bus::EventBus;
use crate::navigation::NavigationReconciler;
use crate::notification::NotificationDecider;
use crate::providers::{AuthProvider, GroupsProvider, Notifier, PersonsProvider, Router};

pub struct OrchestratorDependencies {
    pub app: AppInfo,
    pub auth: Arc<dyn AuthProvider>,
    pub router: Arc<dyn Router>,
    pub groups: Arc<dyn GroupsProvider>,
    pub persons: Arc<dyn PersonsProvider>,
    pub notifier: Arc<dyn Notifier>,
    pub posts: EventBus<IncomingPost>,
    pub changes: EventBus<StateChange>,
}

pub struct Orchestrator {
    app: AppInfo,
    decider: Arc<NotificationDecider>,
    reconciler: Arc<NavigationReconciler>,
    posts: EventBus<IncomingPost>,
    changes: EventBus<StateChange>,
    initialized: AtomicBool,
}

impl Orchestrator {
    pub fn new(deps: OrchestratorDependencies) -> Self {
        let decider = NotificationDecider::new(
            Arc::clone(&deps.groups),
            deps.persons,
            deps.notifier,
        );
        let reconciler = NavigationReconciler::new(deps.auth, deps.router, deps.groups);

        Self {
            app: deps.app,
            decider: Arc::new(decider),
            reconciler: Arc::new(reconciler),
            posts: deps.posts,
            changes: deps.changes,
            initialized: AtomicBool::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.app.name
    }

    pub fn version(&self) -> &str {
        &self.app.version
    }

    /// 安装订阅并立即执行一次路由纠正。
    ///
    /// 必须在 tokio 运行时内调用，且只能调用一次。首次纠正失败只记录日志，
    /// 订阅照常生效，下一次相关状态变化时会再次纠正。
    pub fn initialize(&self) -> Result<(), ApplicationError> {
        if self
            .initialized
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ApplicationError::AlreadyInitialized);
        }

        // 先订阅再启动任务，避免漏掉启动期间发布的事件
        let posts = self.posts.subscribe();
        let changes = self.changes.subscribe();
        tokio::spawn(run_post_listener(posts, Arc::clone(&self.decider)));
        tokio::spawn(run_state_listener(changes, Arc::clone(&self.reconciler)));

        tracing::info!(
            name = %self.app.name,
            version = %self.app.version,
            post_subscribers = self.posts.subscriber_count(),
            change_subscribers = self.changes.subscriber_count(),
            "编排器已初始化"
        );

        // 订阅之前状态可能已经稳定
        reconcile_and_log(&self.reconciler);
        Ok(())
    }
}

async fn run_post_listener(
    mut receiver: broadcast::Receiver<IncomingPost>,
    decider: Arc<NotificationDecider>,
) {
    loop {
        match receiver.recv().await {
            Ok(post) => {
                decider.handle_new_post(&post);
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "新消息事件积压，部分通知被跳过");
            }
            Err(RecvError::Closed) => break,
        }
    }
    tracing::debug!("新消息订阅结束");
}

async fn run_state_listener(
    mut receiver: broadcast::Receiver<StateChange>,
    reconciler: Arc<NavigationReconciler>,
) {
    loop {
        match receiver.recv().await {
            Ok(change) if change.affects_navigation() => reconcile_and_log(&reconciler),
            Ok(_) => {}
            // 决策只看当前状态，积压时补一次即可
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "状态变化事件积压");
                reconcile_and_log(&reconciler);
            }
            Err(RecvError::Closed) => break,
        }
    }
    tracing::debug!("状态变化订阅结束");
}

fn reconcile_and_log(reconciler: &NavigationReconciler) {
    if let Err(err) = reconciler.reconcile() {
        tracing::error!(error = %err, "路由纠正失败");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationRequest;
    use crate::providers::{MockAuthProvider, MockNotifier, MockPersonsProvider, MockRouter};
    use domain::{AuthState, GroupId, GroupsState, LoginStatus};
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;
    use std::time::Duration;

    struct StaticGroups(GroupsState);

    impl GroupsProvider for StaticGroups {
        fn state(&self) -> GroupsState {
            self.0.clone()
        }

        fn update_current_group_id(&self, _group_id: GroupId) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    fn app_info() -> AppInfo {
        AppInfo {
            name: "Glip".into(),
            version: "1.2.3".into(),
        }
    }

    fn orchestrator(
        auth: AuthState,
        router: MockRouter,
        notifier: MockNotifier,
    ) -> (Orchestrator, EventBus<IncomingPost>, EventBus<StateChange>) {
        let mut auth_provider = MockAuthProvider::new();
        auth_provider.expect_state().return_const(auth);
        let mut persons = MockPersonsProvider::new();
        persons.expect_person().returning(|_| None);

        let posts = EventBus::new(8);
        let changes = EventBus::new(8);
        let orchestrator = Orchestrator::new(OrchestratorDependencies {
            app: app_info(),
            auth: Arc::new(auth_provider),
            router: Arc::new(router),
            groups: Arc::new(StaticGroups(GroupsState {
                ready: true,
                current_group_id: Some(GroupId::from("g1")),
            })),
            persons: Arc::new(persons),
            notifier: Arc::new(notifier),
            posts: posts.clone(),
            changes: changes.clone(),
        });
        (orchestrator, posts, changes)
    }

    #[tokio::test]
    async fn exposes_app_name_and_version() {
        let mut router = MockRouter::new();
        router.expect_current_path().return_const("/settings".to_string());
        let (orchestrator, _, _) = orchestrator(AuthState::pending(), router, MockNotifier::new());

        assert_eq!(orchestrator.name(), "Glip");
        assert_eq!(orchestrator.version(), "1.2.3");
    }

    #[tokio::test]
    async fn initialize_twice_is_rejected() {
        let mut router = MockRouter::new();
        router.expect_current_path().return_const("/settings".to_string());
        let (orchestrator, _, _) = orchestrator(AuthState::pending(), router, MockNotifier::new());

        assert!(orchestrator.initialize().is_ok());
        assert!(matches!(
            orchestrator.initialize(),
            Err(ApplicationError::AlreadyInitialized)
        ));
    }

    #[tokio::test]
    async fn initialize_honours_already_settled_state() {
        let mut router = MockRouter::new();
        router.expect_current_path().return_const("/glip".to_string());
        router
            .expect_push()
            .withf(|path| path == "/")
            .times(1)
            .returning(|_| Ok(()));
        let (orchestrator, _, _) = orchestrator(
            AuthState::settled(LoginStatus::LoggedOut),
            router,
            MockNotifier::new(),
        );

        orchestrator.initialize().unwrap();
    }

    #[tokio::test]
    async fn failed_initial_redirect_keeps_subscriptions_alive() {
        let pushes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pushes);
        let mut router = MockRouter::new();
        router.expect_current_path().return_const("/glip".to_string());
        router.expect_push().returning(move |path| {
            // 第一次跳转失败，之后成功
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(domain::DomainError::invalid_route(path).into())
            } else {
                Ok(())
            }
        });

        let (orchestrator, _, changes) = orchestrator(
            AuthState::settled(LoginStatus::LoggedOut),
            router,
            MockNotifier::new(),
        );

        assert!(orchestrator.initialize().is_ok());
        assert_eq!(pushes.load(Ordering::SeqCst), 1);
        assert_eq!(changes.subscriber_count(), 1);

        changes.publish(StateChange::Route);
        for _ in 0..50 {
            if pushes.load(Ordering::SeqCst) >= 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(pushes.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn post_events_reach_the_notifier() {
        let mut router = MockRouter::new();
        router.expect_current_path().return_const("/settings".to_string());

        let seen: Arc<Mutex<Vec<NotificationRequest>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().returning(move |request| {
            sink.lock().unwrap().push(request);
            Ok(())
        });

        let (orchestrator, posts, _) =
            orchestrator(AuthState::settled(LoginStatus::LoggedIn), router, notifier);
        orchestrator.initialize().unwrap();

        posts.publish(IncomingPost::new("p1", "g1", "u1", "suppressed"));
        posts.publish(IncomingPost::new("p2", "g2", "u1", "shown"));

        for _ in 0..50 {
            if !seen.lock().unwrap().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].notification.text, "shown");
    }

    #[tokio::test]
    async fn irrelevant_state_changes_do_not_trigger_navigation() {
        let pushes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pushes);
        let mut router = MockRouter::new();
        router.expect_current_path().return_const("/glip".to_string());
        router
            .expect_push()
            .withf(|path| path == "/")
            .returning(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });

        let (orchestrator, _, changes) = orchestrator(
            AuthState::settled(LoginStatus::LoggedOut),
            router,
            MockNotifier::new(),
        );
        orchestrator.initialize().unwrap();
        assert_eq!(pushes.load(Ordering::SeqCst), 1);

        changes.publish(StateChange::Persons);
        changes.publish(StateChange::Throttle);
        changes.publish(StateChange::Auth);

        for _ in 0..50 {
            if pushes.load(Ordering::SeqCst) >= 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;

        // 初始化时一次，Auth 变化时一次，Persons 和 Throttle 变化不触发
        assert_eq!(pushes.load(Ordering::SeqCst), 2);
    }
}
