//! Client configuration
//!
//! Loaded from YAML, then overridden from the environment. Every field has
//! a default so an empty file is valid apart from the endpoint.
//!
//! ```yaml
//! endpoint: https://control-plane.example.com
//! target_prefix: ControlPlane_v1
//! timeout_ms: 30000
//! max_retries: 3
//! backoff: { type: exponential, initial_ms: 100, max_ms: 20000 }
//! rate_limit: { requests_per_second: 10, burst_size: 10 }
//! auth: { type: bearer, token: "..." }
//! pagination: { page_size: 100 }
//! ```

use crate::api::DEFAULT_TARGET_PREFIX;
use crate::auth::AuthConfig;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::pagination::PaginatorConfig;
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable overriding `endpoint`
pub const ENV_ENDPOINT: &str = "FLEET_ENDPOINT";

/// Environment variable supplying a bearer token
pub const ENV_TOKEN: &str = "FLEET_TOKEN";

/// Environment variable overriding `timeout_ms`
pub const ENV_TIMEOUT_MS: &str = "FLEET_TIMEOUT_MS";

/// Environment variable overriding `max_retries`
pub const ENV_MAX_RETRIES: &str = "FLEET_MAX_RETRIES";

// ============================================================================
// Backoff
// ============================================================================

/// Retry backoff settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackoffConfig {
    /// Backoff curve
    #[serde(rename = "type")]
    pub backoff_type: BackoffType,
    /// Delay before the first retry
    pub initial_ms: u64,
    /// Upper bound on any single delay
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: 100,
            max_ms: 20_000,
        }
    }
}

// ============================================================================
// Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Control-plane endpoint URL
    pub endpoint: Option<String>,
    /// Action namespace prepended to every operation name
    pub target_prefix: String,
    /// Per-request timeout
    pub timeout_ms: u64,
    /// Retries per request (not per pagination)
    pub max_retries: u32,
    /// Retry backoff
    pub backoff: BackoffConfig,
    /// Client-side rate limit; `null` disables it
    pub rate_limit: Option<RateLimiterConfig>,
    /// Credentials
    pub auth: AuthConfig,
    /// Extra headers sent on every request
    pub headers: HashMap<String, String>,
    /// Pagination defaults
    pub pagination: PaginatorConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            target_prefix: DEFAULT_TARGET_PREFIX.to_string(),
            timeout_ms: 30_000,
            max_retries: 3,
            backoff: BackoffConfig::default(),
            rate_limit: Some(RateLimiterConfig::default()),
            auth: AuthConfig::None,
            headers: HashMap::new(),
            pagination: PaginatorConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Create a config for the given endpoint with defaults elsewhere
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    /// Load a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Parse a YAML document; an empty document yields the defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.endpoint = Some(endpoint);
        }

        if let Some(token) = lookup(ENV_TOKEN) {
            self.auth = AuthConfig::bearer(token);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            self.timeout_ms = raw
                .parse()
                .map_err(|e| Error::invalid_value(ENV_TIMEOUT_MS, format!("{e}")))?;
        }

        if let Some(raw) = lookup(ENV_MAX_RETRIES) {
            self.max_retries = raw
                .parse()
                .map_err(|e| Error::invalid_value(ENV_MAX_RETRIES, format!("{e}")))?;
        }

        Ok(())
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or_else(|| Error::missing_field("endpoint"))?;
        let url = Url::parse(endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "endpoint",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.target_prefix.trim().is_empty() {
            return Err(Error::invalid_value("target_prefix", "must not be empty"));
        }

        if self.timeout_ms == 0 {
            return Err(Error::invalid_value("timeout_ms", "must be greater than zero"));
        }

        if self.backoff.initial_ms > self.backoff.max_ms {
            return Err(Error::invalid_value(
                "backoff",
                "initial_ms must not exceed max_ms",
            ));
        }

        if let Some(rate_limit) = &self.rate_limit {
            rate_limit.validate()?;
        }

        self.pagination.validate()
    }

    /// Derive the HTTP client configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_millis(self.timeout_ms))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff.backoff_type,
                Duration::from_millis(self.backoff.initial_ms),
                Duration::from_millis(self.backoff.max_ms),
            );

        if let Some(endpoint) = &self.endpoint {
            builder = builder.base_url(endpoint.clone());
        }

        builder = match &self.rate_limit {
            Some(rate_limit) => builder.rate_limit(rate_limit.clone()),
            None => builder.no_rate_limit(),
        };

        for (key, value) in &self.headers {
            builder = builder.header(key.clone(), value.clone());
        }

        builder.build()
    }
}
