use std::sync::Arc;

use serde::Serialize;

use crate::providers::{
    AuthProvider, ConnectivityProvider, LocaleProvider, OAuthProvider, ThrottleProvider,
};

/// 欢迎（登录）页的 props
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomePageProps {
    pub current_locale: String,
    /// 登录按钮是否禁用
    pub disabled: bool,
    pub version: String,
    pub show_spinner: bool,
}

pub struct WelcomePageDependencies {
    pub auth: Arc<dyn AuthProvider>,
    pub locale: Arc<dyn LocaleProvider>,
    pub throttle: Arc<dyn ThrottleProvider>,
    pub connectivity: Arc<dyn ConnectivityProvider>,
    pub oauth: Arc<dyn OAuthProvider>,
    pub version: String,
}

pub struct WelcomePage {
    deps: WelcomePageDependencies,
}

impl WelcomePage {
    pub fn new(deps: WelcomePageDependencies) -> Self {
        Self { deps }
    }

    pub fn props(&self) -> WelcomePageProps {
        let auth = self.deps.auth.state();
        // 登录流程进行中或已登录（即将跳转）时都显示加载动画
        let show_spinner = !auth.ready
            || auth.login_status.is_transitioning()
            || auth.login_status == domain::LoginStatus::LoggedIn;

        WelcomePageProps {
            current_locale: self.deps.locale.current_locale(),
            disabled: !self.deps.oauth.oauth_ready()
                || self.deps.throttle.throttling()
                || !self.deps.connectivity.connectivity(),
            version: self.deps.version.clone(),
            show_spinner,
        }
    }

    pub fn setup_oauth(&self) {
        self.deps.oauth.setup_oauth();
    }

    pub fn destroy_oauth(&self) {
        self.deps.oauth.destroy_oauth();
    }

    pub fn on_login_button_click(&self) {
        self.deps.oauth.open_oauth_page();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{
        MockAuthProvider, MockConnectivityProvider, MockLocaleProvider, MockOAuthProvider,
        MockThrottleProvider,
    };
    use domain::{AuthState, LoginStatus};

    struct Flags {
        auth: AuthState,
        oauth_ready: bool,
        throttling: bool,
        connectivity: bool,
    }

    impl Default for Flags {
        fn default() -> Self {
            Self {
                auth: AuthState::settled(LoginStatus::LoggedOut),
                oauth_ready: true,
                throttling: false,
                connectivity: true,
            }
        }
    }

    fn page(flags: Flags, oauth: Option<MockOAuthProvider>) -> WelcomePage {
        let mut auth = MockAuthProvider::new();
        auth.expect_state().return_const(flags.auth);
        let mut locale = MockLocaleProvider::new();
        locale.expect_current_locale().return_const("fr-FR".to_string());
        let mut throttle = MockThrottleProvider::new();
        throttle.expect_throttling().return_const(flags.throttling);
        let mut connectivity = MockConnectivityProvider::new();
        connectivity
            .expect_connectivity()
            .return_const(flags.connectivity);
        let oauth = oauth.unwrap_or_else(|| {
            let mut oauth = MockOAuthProvider::new();
            oauth.expect_oauth_ready().return_const(flags.oauth_ready);
            oauth
        });

        WelcomePage::new(WelcomePageDependencies {
            auth: Arc::new(auth),
            locale: Arc::new(locale),
            throttle: Arc::new(throttle),
            connectivity: Arc::new(connectivity),
            oauth: Arc::new(oauth),
            version: "2.0.1".into(),
        })
    }

    #[test]
    fn logged_out_user_sees_enabled_login_button() {
        let props = page(Flags::default(), None).props();
        assert_eq!(
            props,
            WelcomePageProps {
                current_locale: "fr-FR".into(),
                disabled: false,
                version: "2.0.1".into(),
                show_spinner: false,
            }
        );
    }

    #[test]
    fn login_is_disabled_when_any_precondition_fails() {
        let cases = [
            Flags {
                oauth_ready: false,
                ..Flags::default()
            },
            Flags {
                throttling: true,
                ..Flags::default()
            },
            Flags {
                connectivity: false,
                ..Flags::default()
            },
        ];
        for flags in cases {
            assert!(page(flags, None).props().disabled);
        }
    }

    #[test]
    fn spinner_shows_while_auth_is_busy() {
        let busy = [
            AuthState::pending(),
            AuthState::settled(LoginStatus::LoggingIn),
            AuthState::settled(LoginStatus::LoggingOut),
            AuthState::settled(LoginStatus::BeforeLogout),
            AuthState::settled(LoginStatus::LoggedIn),
        ];
        for auth in busy {
            let flags = Flags {
                auth,
                ..Flags::default()
            };
            assert!(page(flags, None).props().show_spinner, "{auth:?}");
        }
    }

    #[test]
    fn callbacks_forward_to_oauth() {
        let mut oauth = MockOAuthProvider::new();
        oauth.expect_setup_oauth().times(1).return_const(());
        oauth.expect_destroy_oauth().times(1).return_const(());
        oauth.expect_open_oauth_page().times(1).return_const(());

        let page = page(Flags::default(), Some(oauth));
        page.setup_oauth();
        page.on_login_button_click();
        page.destroy_oauth();
    }
}
