//! Auth API configuration resolved at build time.
//!
//! DESIGN
//! ======
//! A WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled. Absent or unparsable values fall
//! back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/auth";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 3000;
pub const DEFAULT_HEALTH_TIMEOUT_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the auth service, without a trailing slash.
    pub base_url: String,
    /// Abort deadline for sign-up and login.
    pub request_timeout: Duration,
    /// Abort deadline for the health probe.
    pub health_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl ApiConfig {
    /// Build config from build-time environment variables.
    ///
    /// Optional:
    /// - `PORTAL_API_BASE_URL`: default `http://localhost:5000/api/auth`
    /// - `PORTAL_REQUEST_TIMEOUT_MS`: default 3000
    /// - `PORTAL_HEALTH_TIMEOUT_MS`: default 2000
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("PORTAL_API_BASE_URL"),
            option_env!("PORTAL_REQUEST_TIMEOUT_MS"),
            option_env!("PORTAL_HEALTH_TIMEOUT_MS"),
        )
    }

    /// Build config from raw string values, applying defaults.
    pub fn from_values(base_url: Option<&str>, request_timeout_ms: Option<&str>, health_timeout_ms: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self {
            base_url,
            request_timeout: parse_millis(request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS),
            health_timeout: parse_millis(health_timeout_ms, DEFAULT_HEALTH_TIMEOUT_MS),
        }
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn parse_millis(raw: Option<&str>, default: u64) -> Duration {
    let millis = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default);
    Duration::from_millis(millis)
}
