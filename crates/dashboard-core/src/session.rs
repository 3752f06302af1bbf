//! Session Flag
//!
//! "Logged in" is a single marker in key/value storage: the literal `"true"`
//! under one key while authenticated, absent otherwise. No token, no expiry.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{LoginError, LoginField};

/// Storage key used by the dashboard
pub const DEFAULT_SESSION_KEY: &str = "isAuthenticated";

const AUTHENTICATED_MARKER: &str = "true";

/// Minimal key/value storage, shaped after the browser's `Storage` API
pub trait FlagStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

/// Several flags can share one backend, like tabs sharing localStorage
impl<S: FlagStorage + ?Sized> FlagStorage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        (**self).remove_item(key)
    }
}

/// Process-local storage, used in tests and when the browser has no localStorage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        let entries = self.entries.lock().map_err(|e| e.to_string())?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        let mut entries = self.entries.lock().map_err(|e| e.to_string())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        let mut entries = self.entries.lock().map_err(|e| e.to_string())?;
        entries.remove(key);
        Ok(())
    }
}

/// Login form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Form-level checks: username 2..=100 characters, password 6..=100 characters
    pub fn validate(&self) -> Result<(), LoginError> {
        check_length(LoginField::Username, &self.username, 2)?;
        check_length(LoginField::Password, &self.password, 6)
    }

    /// Validate, then compare against the expected pair
    pub fn authenticate(&self, expected: &Credentials) -> Result<(), LoginError> {
        self.validate()?;
        if self == expected {
            Ok(())
        } else {
            Err(LoginError::Mismatch)
        }
    }
}

fn check_length(field: LoginField, value: &str, min: usize) -> Result<(), LoginError> {
    const MAX: usize = 100;
    let len = value.chars().count();
    if len < min {
        Err(LoginError::Invalid { field, reason: format!("must contain at least {} characters", min) })
    } else if len > MAX {
        Err(LoginError::Invalid { field, reason: format!("must contain at most {} characters", MAX) })
    } else {
        Ok(())
    }
}

/// The login flag, bound to a storage backend and key
#[derive(Debug, Clone)]
pub struct SessionFlag<S> {
    storage: S,
    key: String,
}

impl<S: FlagStorage> SessionFlag<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Storage read failures count as "not authenticated"
    pub fn is_authenticated(&self) -> bool {
        match self.storage.get_item(&self.key) {
            Ok(value) => value.as_deref() == Some(AUTHENTICATED_MARKER),
            Err(e) => {
                log::warn!("failed to read session flag: {}", e);
                false
            }
        }
    }

    /// `true` writes the marker, `false` removes it
    pub fn set(&self, authenticated: bool) {
        let result = if authenticated {
            self.storage.set_item(&self.key, AUTHENTICATED_MARKER)
        } else {
            self.storage.remove_item(&self.key)
        };
        if let Err(e) = result {
            log::warn!("failed to write session flag: {}", e);
        }
    }

    /// Check `credentials` against `expected` and set the flag on success
    pub fn login(&self, credentials: &Credentials, expected: &Credentials) -> Result<(), LoginError> {
        credentials.authenticate(expected)?;
        self.set(true);
        log::info!("logged in as {}", credentials.username);
        Ok(())
    }

    pub fn logout(&self) {
        self.set(false);
        log::info!("logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Credentials {
        Credentials::new("admin", "password")
    }

    fn flag() -> SessionFlag<MemoryStorage> {
        SessionFlag::new(MemoryStorage::new(), DEFAULT_SESSION_KEY)
    }

    #[test]
    fn test_set_writes_and_removes_marker() {
        let session = flag();
        assert!(!session.is_authenticated());

        session.set(true);
        assert!(session.is_authenticated());
        assert_eq!(session.storage.get_item(DEFAULT_SESSION_KEY), Ok(Some("true".to_string())));

        session.set(false);
        assert!(!session.is_authenticated());
        assert_eq!(session.storage.get_item(DEFAULT_SESSION_KEY), Ok(None));
    }

    #[test]
    fn test_logout_elsewhere_seen_on_next_route_entry() {
        use crate::route::{guard, Guarded, Route};

        let storage = MemoryStorage::new();
        let this_tab = SessionFlag::new(&storage, DEFAULT_SESSION_KEY);
        let other_tab = SessionFlag::new(&storage, DEFAULT_SESSION_KEY);

        this_tab.login(&demo(), &demo()).unwrap();
        assert_eq!(guard(Route::Users, this_tab.is_authenticated()), Guarded::Render(Route::Users));

        other_tab.logout();
        assert_eq!(guard(Route::Users, this_tab.is_authenticated()), Guarded::Redirect(Route::Login));

        other_tab.set(true);
        assert_eq!(guard(Route::Login, this_tab.is_authenticated()), Guarded::Redirect(Route::Overview));
    }

    #[test]
    fn test_only_literal_true_counts() {
        let session = flag();
        session.storage.set_item(DEFAULT_SESSION_KEY, "yes").unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_with_demo_credentials() {
        let session = flag();
        assert_eq!(session.login(&demo(), &demo()), Ok(()));
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_wrong_credentials_stay_logged_out() {
        let session = flag();
        for attempt in [
            Credentials::new("admin", "wrongpass"),
            Credentials::new("root", "password"),
            Credentials::new("Admin", "password"),
        ] {
            assert_eq!(session.login(&attempt, &demo()), Err(LoginError::Mismatch));
            assert!(!session.is_authenticated());
        }
    }

    #[test]
    fn test_form_validation_precedes_comparison() {
        let short_user = Credentials::new("a", "password");
        assert!(matches!(
            short_user.authenticate(&demo()),
            Err(LoginError::Invalid { field: LoginField::Username, .. })
        ));

        let short_password = Credentials::new("admin", "pass");
        assert!(matches!(
            short_password.authenticate(&demo()),
            Err(LoginError::Invalid { field: LoginField::Password, .. })
        ));

        let long_user = Credentials::new("x".repeat(101), "password");
        assert!(long_user.validate().is_err());
    }
}
