use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use application::{EventBus, StateChange, ThrottleProvider};

/// 单次冷却的上限
pub const MAX_THROTTLE_DURATION: Duration = Duration::from_secs(24 * 60 * 60);

/// 接口限流状态
///
/// 服务端返回限流响应后进入冷却窗口，窗口内登录等操作会被禁用。
pub struct ThrottleLimiter {
    /// 冷却时长
    throttle_duration: Duration,
    /// 冷却结束时间
    throttled_until: RwLock<Option<Instant>>,
    changes: EventBus<StateChange>,
}

impl ThrottleLimiter {
    pub fn new(throttle_duration: Duration, changes: EventBus<StateChange>) -> Self {
        Self {
            throttle_duration,
            throttled_until: RwLock::new(None),
            changes,
        }
    }

    /// 收到限流响应时调用
    pub fn throttle(&self) {
        self.throttle_for(self.throttle_duration);
    }

    pub fn throttle_for(&self, duration: Duration) {
        let duration = if duration > MAX_THROTTLE_DURATION {
            tracing::warn!(
                requested_secs = duration.as_secs(),
                max_secs = MAX_THROTTLE_DURATION.as_secs(),
                "冷却时间过长，按上限处理"
            );
            MAX_THROTTLE_DURATION
        } else {
            duration
        };
        let now = Instant::now();
        let until = now.checked_add(duration).unwrap_or(now);
        *self
            .throttled_until
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(until);
        tracing::warn!(seconds = duration.as_secs(), "接口被限流");
        self.changes.publish(StateChange::Throttle);
    }

    /// 提前结束冷却
    pub fn clear(&self) {
        let was_throttled = self
            .throttled_until
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some();
        if was_throttled {
            self.changes.publish(StateChange::Throttle);
        }
    }

    /// 剩余冷却时间
    pub fn remaining(&self) -> Option<Duration> {
        let until = (*self
            .throttled_until
            .read()
            .unwrap_or_else(PoisonError::into_inner))?;
        until.checked_duration_since(Instant::now())
    }
}

impl ThrottleProvider for ThrottleLimiter {
    fn throttling(&self) -> bool {
        self.remaining().is_some_and(|left| !left.is_zero())
    }
}
