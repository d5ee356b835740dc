//! SDK Configuration
//!
//! Configuration types for the SDK, loaded from environment variables.

use std::time::Duration;

/// Platform environment the SDK talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production environment (real money).
    #[default]
    Production,
    /// Sandbox environment (simulated accounts).
    Sandbox,
}

impl Environment {
    /// Parse environment from string.
    #[must_use]
    pub fn from_str_case_insensitive(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "SANDBOX" => Self::Sandbox,
            _ => Self::Production,
        }
    }

    /// Check if this is the sandbox environment.
    #[must_use]
    pub const fn is_sandbox(&self) -> bool {
        matches!(self, Self::Sandbox)
    }

    /// Get the environment name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Sandbox => "sandbox",
        }
    }

    /// Default gRPC endpoint for this environment.
    #[must_use]
    pub const fn default_endpoint(&self) -> &'static str {
        match self {
            Self::Production => "https://api.marketgate.io:443",
            Self::Sandbox => "https://sandbox.marketgate.io:443",
        }
    }
}

/// Complete SDK configuration.
#[derive(Clone)]
pub struct SdkConfig {
    /// Platform environment.
    pub environment: Environment,
    /// gRPC endpoint URI.
    pub endpoint: String,
    /// Name reported in the `x-app-name` metadata and the user agent.
    pub app_name: String,
    /// Channel connect timeout.
    pub connect_timeout: Duration,
    /// HTTP/2 keep-alive ping interval.
    pub keepalive_interval: Duration,
    token: String,
}

impl SdkConfig {
    /// Create a production configuration with defaults.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::for_environment(token, Environment::Production)
    }

    /// Create a sandbox configuration with defaults.
    #[must_use]
    pub fn sandbox(token: impl Into<String>) -> Self {
        Self::for_environment(token, Environment::Sandbox)
    }

    fn for_environment(token: impl Into<String>, environment: Environment) -> Self {
        Self {
            environment,
            endpoint: environment.default_endpoint().to_string(),
            app_name: "marketgate-rust".to_string(),
            connect_timeout: Duration::from_secs(10),
            keepalive_interval: Duration::from_secs(30),
            token: token.into(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `.env` if present, then:
    /// - `MARKETGATE_TOKEN` (required): API access token
    /// - `MARKETGATE_ENV`: `production` | `sandbox` (default: production)
    /// - `MARKETGATE_ENDPOINT`: endpoint override
    /// - `MARKETGATE_APP_NAME`: app name override
    /// - `MARKETGATE_CONNECT_TIMEOUT_SECS`, `MARKETGATE_KEEPALIVE_SECS`
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let token = std::env::var("MARKETGATE_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("MARKETGATE_TOKEN".to_string()))?;
        if token.is_empty() {
            return Err(ConfigError::EmptyValue("MARKETGATE_TOKEN".to_string()));
        }

        let environment = std::env::var("MARKETGATE_ENV")
            .map(|s| Environment::from_str_case_insensitive(&s))
            .unwrap_or_default();

        let mut config = Self::for_environment(token, environment);

        if let Ok(endpoint) = std::env::var("MARKETGATE_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(app_name) = std::env::var("MARKETGATE_APP_NAME") {
            config.app_name = app_name;
        }
        config.connect_timeout =
            parse_env_duration_secs("MARKETGATE_CONNECT_TIMEOUT_SECS", config.connect_timeout);
        config.keepalive_interval =
            parse_env_duration_secs("MARKETGATE_KEEPALIVE_SECS", config.keepalive_interval);

        Ok(config)
    }

    /// Replace the endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the reported app name.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// The API access token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkConfig")
            .field("environment", &self.environment)
            .field("endpoint", &self.endpoint)
            .field("app_name", &self.app_name)
            .field("connect_timeout", &self.connect_timeout)
            .field("keepalive_interval", &self.keepalive_interval)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
}

fn parse_env_duration_secs(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(default, Duration::from_secs)
}
