//! Server configuration parsed from environment variables.
//!
//! Every key is optional. Unset keys take their default; a key that is set
//! but cannot be parsed is a startup error rather than a silent fallback.

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 2000;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Simulated latency applied to every login attempt.
    pub login_delay: Duration,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
    /// Permissive CORS for local front-end development.
    pub cors_allow_any: bool,
    pub session_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
            cookie_secure: false,
            cors_allow_any: true,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LOGIN_DELAY_MS`: default 2000
    /// - `COOKIE_SECURE`: default false
    /// - `CORS_ALLOW_ANY`: default true
    /// - `SESSION_TTL_SECS`: default 86400
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a key is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a key is set to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let login_delay_ms = env_parse(&lookup, "LOGIN_DELAY_MS", DEFAULT_LOGIN_DELAY_MS)?;
        let session_ttl_secs = env_parse(&lookup, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?;

        Ok(Self {
            port: env_parse(&lookup, "PORT", DEFAULT_PORT)?,
            login_delay: Duration::from_millis(login_delay_ms),
            cookie_secure: env_flag(&lookup, "COOKIE_SECURE", false)?,
            cors_allow_any: env_flag(&lookup, "CORS_ALLOW_ANY", true)?,
            session_ttl: Duration::from_secs(session_ttl_secs),
        })
    }
}

fn env_parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn env_flag(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key, value: raw }),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
