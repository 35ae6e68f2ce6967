// crates/maybe-io/src/config.rs
// Environment-based configuration for the HTTP helpers

use std::time::Duration;

use tracing::{debug, warn};

/// Default whole-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Whole-request timeout (MAYBE_HTTP_TIMEOUT_SECS)
    pub timeout: Duration,
    /// Connect timeout (MAYBE_HTTP_CONNECT_TIMEOUT_SECS)
    pub connect_timeout: Duration,
    /// User-Agent header (MAYBE_HTTP_USER_AGENT)
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: CONNECT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

impl HttpConfig {
    /// Load settings from environment variables, falling back to defaults
    /// for anything unset or unparsable
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let timeout = read_secs(&lookup, "MAYBE_HTTP_TIMEOUT_SECS").unwrap_or(defaults.timeout);
        let connect_timeout =
            read_secs(&lookup, "MAYBE_HTTP_CONNECT_TIMEOUT_SECS").unwrap_or(defaults.connect_timeout);
        let user_agent = lookup("MAYBE_HTTP_USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        let config = Self {
            timeout,
            connect_timeout,
            user_agent,
        };
        debug!(
            timeout_secs = config.timeout.as_secs(),
            connect_timeout_secs = config.connect_timeout.as_secs(),
            user_agent = %config.user_agent,
            "HTTP config loaded"
        );
        config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_user_agent() -> String {
    format!("maybe/{}", env!("CARGO_PKG_VERSION"))
}

/// Read a positive whole number of seconds
fn read_secs(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<Duration> {
    let raw = lookup(name)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<u64>() {
        Ok(0) => {
            warn!(var = name, "Zero timeout ignored, using default");
            None
        }
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(_) => {
            warn!(var = name, value = raw, "Invalid number of seconds, using default");
            None
        }
    }
}

/// Parse a boolean environment variable ("1"/"true"/"yes"/"on" and the inverses)
pub fn parse_bool_env(name: &str) -> Option<bool> {
    parse_bool(&std::env::var(name).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
