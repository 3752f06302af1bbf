//! Application Context
//!
//! Shared state provided via Leptos Context API: the session flag, the current
//! route and the toast queue. Created once in `App`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use dashboard_core::{Credentials, LoginError, Route, SessionFlag};

use crate::config::AppConfig;
use crate::web::{self, BrowserStorage};

/// Login state. Only `login` and `logout` change it.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Mirrors the stored flag - read
    pub authenticated: ReadSignal<bool>,
    /// Mirrors the stored flag - write
    set_authenticated: WriteSignal<bool>,
    flag: StoredValue<SessionFlag<BrowserStorage>>,
    expected: StoredValue<Credentials>,
}

impl SessionContext {
    pub fn new(config: &AppConfig) -> Self {
        let flag = SessionFlag::new(BrowserStorage, config.session_key.clone());
        let (authenticated, set_authenticated) = signal(flag.is_authenticated());
        Self {
            authenticated,
            set_authenticated,
            flag: StoredValue::new(flag),
            expected: StoredValue::new(config.demo_credentials.clone()),
        }
    }

    pub fn login(&self, credentials: &Credentials) -> Result<(), LoginError> {
        let expected = self.expected.get_value();
        self.flag.with_value(|flag| flag.login(credentials, &expected))?;
        self.set_authenticated.set(true);
        Ok(())
    }

    pub fn logout(&self) {
        self.flag.with_value(|flag| flag.logout());
        self.set_authenticated.set(false);
    }

    /// Re-read the stored flag; another tab may have logged in or out
    pub fn refresh(&self) -> bool {
        let authenticated = self.flag.with_value(|flag| flag.is_authenticated());
        if authenticated != self.authenticated.get_untracked() {
            log::debug!("session flag changed outside this view: {}", authenticated);
            self.set_authenticated.set(authenticated);
        }
        authenticated
    }
}

/// Hash-based navigation. Every route entry re-reads the session flag
/// before the guard sees the new route.
#[derive(Clone, Copy)]
pub struct Navigator {
    /// Route in the address bar, before the guard runs
    pub requested: ReadSignal<Route>,
    set_requested: WriteSignal<Route>,
    session: SessionContext,
}

impl Navigator {
    pub fn new(session: SessionContext) -> Self {
        let (requested, set_requested) = signal(Route::from_path(&web::current_path()));
        Self { requested, set_requested, session }
    }

    pub fn navigate(&self, route: Route) {
        log::debug!("navigate to {}", route);
        web::push_path(route.path());
        self.enter(route);
    }

    /// Navigate without keeping the current entry in history
    pub fn redirect(&self, route: Route) {
        log::debug!("redirect to {}", route);
        web::replace_path(route.path());
        self.enter(route);
    }

    /// Pick up back/forward and hand-edited URLs
    pub fn sync_from_location(&self) {
        self.enter(Route::from_path(&web::current_path()));
    }

    fn enter(&self, route: Route) {
        self.session.refresh();
        if route != self.requested.get_untracked() {
            self.set_requested.set(route);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// Transient notifications
#[derive(Clone, Copy)]
pub struct Toasts {
    pub items: ReadSignal<Vec<Toast>>,
    set_items: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
    duration_ms: u32,
}

impl Toasts {
    pub fn new(config: &AppConfig) -> Self {
        let (items, set_items) = signal(Vec::new());
        Self {
            items,
            set_items,
            next_id: StoredValue::new(1),
            duration_ms: config.toast_duration_ms,
        }
    }

    /// Show `message` until dismissed or the configured duration passes
    pub fn show(&self, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.set_items.update(|items| items.push(Toast { id, message: message.into() }));

        let set_items = self.set_items;
        let duration_ms = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            set_items.try_update(|items| items.retain(|toast| toast.id != id));
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.set_items.update(|items| items.retain(|toast| toast.id != id));
    }
}

pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}
