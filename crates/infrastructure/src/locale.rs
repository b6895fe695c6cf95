use std::sync::{PoisonError, RwLock};

use application::LocaleProvider;

pub struct InMemoryLocale {
    current: RwLock<String>,
}

impl InMemoryLocale {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(default_locale.into()),
        }
    }
}

impl LocaleProvider for InMemoryLocale {
    fn current_locale(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
