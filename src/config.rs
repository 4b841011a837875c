//! Host configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GOALS_API_URL: &str = "http://127.0.0.1:3333";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// `GOALS_API_URL` is not an http(s) URL.
    #[error("GOALS_API_URL must start with http:// or https://, got {0:?}")]
    ApiUrlScheme(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Upstream goals API base URL, without a trailing slash.
    pub api_url: String,
    pub timeouts: ApiTimeouts,
    /// Directory holding static assets served at `/`.
    pub public_dir: PathBuf,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GOALS_API_URL`: default `http://127.0.0.1:3333`
    /// - `GOALS_API_TIMEOUT_SECS`: default 10
    /// - `GOALS_API_CONNECT_TIMEOUT_SECS`: default 5
    /// - `PUBLIC_DIR`: default `<manifest dir>/public`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let api_url = lookup("GOALS_API_URL")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_GOALS_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::ApiUrlScheme(api_url));
        }

        let timeouts = ApiTimeouts {
            request_secs: parse_or(
                "GOALS_API_TIMEOUT_SECS",
                lookup("GOALS_API_TIMEOUT_SECS"),
                DEFAULT_API_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "GOALS_API_CONNECT_TIMEOUT_SECS",
                lookup("GOALS_API_CONNECT_TIMEOUT_SECS"),
                DEFAULT_API_CONNECT_TIMEOUT_SECS,
            )?,
        };

        let public_dir = lookup("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"));

        Ok(Self { port, api_url, timeouts, public_dir })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
