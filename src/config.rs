//! Runtime configuration loaded from the environment (and `.env` via dotenvy)

use std::time::Duration;

/// Configuration errors raised at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Sessions are dropped after this long without use
    pub session_idle: Duration,
    /// Artificial latency on login/signup, mimicking the mobile app's mock API
    pub mock_auth_delay: Duration,
    /// Currency code attached to money values
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            session_idle: Duration::from_secs(30 * 60),
            mock_auth_delay: Duration::ZERO,
            currency: "INR".to_string(),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(v) => parse("PORT", &v)?,
            None => defaults.port,
        };
        let session_idle = match lookup("SESSION_IDLE_MINUTES") {
            Some(v) => Duration::from_secs(parse::<u64>("SESSION_IDLE_MINUTES", &v)? * 60),
            None => defaults.session_idle,
        };
        let mock_auth_delay = match lookup("MOCK_AUTH_DELAY_MS") {
            Some(v) => Duration::from_millis(parse("MOCK_AUTH_DELAY_MS", &v)?),
            None => defaults.mock_auth_delay,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            session_idle,
            mock_auth_delay,
            currency: lookup("CURRENCY").unwrap_or(defaults.currency),
        })
    }

    /// Socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
