//! Application configuration module
//!
//! Settings are read from the process environment (after `.env` has been
//! loaded by the binary) or assembled in code through [`AppConfigBuilder`].

use std::time::Duration;
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default model used for answer suggestions
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default base URL of the generative language API
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEV_JWT_SECRET: &str = "dev-secret-change-in-production";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub port: u16,
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// Webhook target for `question_answered` notifications
    pub webhook_url: Option<String>,
    /// API key for the suggestion service
    pub google_api_key: Option<String>,
    /// Suggestion model name
    pub gemini_model: String,
    /// Suggestion API base URL
    pub gemini_api_base: String,
    /// Close WebSocket connections that send nothing for this long
    pub ws_idle_timeout: Option<Duration>,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            webhook_url: None,
            google_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            ws_idle_timeout: None,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut builder = Self::builder();

        if let Some(port) = get("PORT") {
            builder = builder.port(parse_number("PORT", &port)?);
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        match get("JWT_SECRET") {
            Some(secret) => builder = builder.jwt_secret(secret),
            None => tracing::warn!("JWT_SECRET not set. Using an insecure development secret."),
        }
        if let Some(url) = get("WEBHOOK_URL") {
            builder = builder.webhook_url(url);
        }
        if let Some(key) = get("GOOGLE_API_KEY") {
            builder = builder.google_api_key(key);
        }
        if let Some(model) = get("GEMINI_MODEL") {
            builder = builder.gemini_model(model);
        }
        if let Some(base) = get("GEMINI_API_BASE") {
            builder = builder.gemini_api_base(base);
        }
        if let Some(secs) = get("WS_IDLE_TIMEOUT_SECS") {
            let secs: u64 = parse_number("WS_IDLE_TIMEOUT_SECS", &secs)?;
            builder = builder.ws_idle_timeout(Duration::from_secs(secs));
        }
        if let Some(cost) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_number("BCRYPT_COST", &cost)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.ws_idle_timeout == Some(Duration::ZERO) {
            return Err(ConfigError::Invalid {
                key: "WS_IDLE_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }
        for (key, url) in [
            ("WEBHOOK_URL", self.webhook_url.as_deref()),
            ("GEMINI_API_BASE", Some(self.gemini_api_base.as_str())),
        ] {
            if let Some(url) = url {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidUrl(format!("{key}={url}")));
                }
            }
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the PostgreSQL connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    /// Set the webhook target
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.config.webhook_url = Some(url.into());
        self
    }

    /// Set the suggestion API key
    pub fn google_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.google_api_key = Some(key.into());
        self
    }

    /// Set the suggestion model
    pub fn gemini_model(mut self, model: impl Into<String>) -> Self {
        self.config.gemini_model = model.into();
        self
    }

    /// Set the suggestion API base URL
    pub fn gemini_api_base(mut self, base: impl Into<String>) -> Self {
        self.config.gemini_api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the WebSocket idle timeout
    pub fn ws_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.ws_idle_timeout = Some(timeout);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
