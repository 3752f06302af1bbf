//! Application Configuration
//!
//! Compile-time defaults, provided once via context. There is no config file.

use dashboard_core::{ChartLimits, Credentials, DEFAULT_SESSION_KEY};
use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the demo REST API (no trailing slash)
    pub api_base: String,
    /// The only pair the mock login accepts
    pub demo_credentials: Credentials,
    /// localStorage key holding the session flag
    pub session_key: String,
    /// How long the landing spinner shows before redirecting
    pub splash_delay_ms: u32,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    pub chart_limits: ChartLimits,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "https://jsonplaceholder.typicode.com".to_string(),
            demo_credentials: Credentials::new("admin", "password"),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            splash_delay_ms: 1000,
            toast_duration_ms: 3000,
            chart_limits: ChartLimits::default(),
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}

impl AppConfig {
    /// Full URL of an API collection, e.g. `endpoint("users")`
    pub fn endpoint(&self, collection: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let mut config = AppConfig::default();
        assert_eq!(config.endpoint("users"), "https://jsonplaceholder.typicode.com/users");
        config.api_base = "http://localhost:3000/".to_string();
        assert_eq!(config.endpoint("todos"), "http://localhost:3000/todos");
    }
}
