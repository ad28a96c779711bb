//! Environment-driven client settings.

use std::path::PathBuf;
use std::time::Duration;

use crate::Error;

/// Default API endpoint.
pub(crate) const DEFAULT_API_URL: &str = "https://dummyjson.com";

/// Default per-request timeout.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client settings read from the process environment.
///
/// | Variable                 | Meaning                          | Default                 |
/// |--------------------------|----------------------------------|-------------------------|
/// | `SHOPADMIN_API_URL`      | API base URL                     | `https://dummyjson.com` |
/// | `SHOPADMIN_TIMEOUT_SECS` | per-request timeout in seconds   | `30`                    |
/// | `SHOPADMIN_TOKEN_FILE`   | path of the persisted token file | none (memory only)      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// API base URL.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Token file location, when tokens should survive restarts.
    pub token_file: Option<PathBuf>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            token_file: None,
        }
    }
}

impl EnvConfig {
    /// Reads the settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `SHOPADMIN_TIMEOUT_SECS` is not a
    /// whole number.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the settings through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("SHOPADMIN_API_URL").filter(|v| !v.trim().is_empty()) {
            config.api_url = url.trim().to_string();
        }

        if let Some(raw) = lookup("SHOPADMIN_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::configuration(format!("SHOPADMIN_TIMEOUT_SECS is not a number: {}", raw))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.token_file = lookup("SHOPADMIN_TOKEN_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}
