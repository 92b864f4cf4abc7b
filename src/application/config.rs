/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_RATE_LIMIT_BURST_SIZE, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_TIMEOUT_SECS, PROJECT_SLUG_ENV, PROJECT_URL_PREFIX,
    PROJECT_URL_SUFFIX,
};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

static SLUG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$").expect("valid slug pattern")
});

/// Tenant identifier of a hosted Ory project
///
/// A slug is a single DNS label: ASCII letters, digits and `-`, not starting or
/// ending with `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectSlug(String);

impl ProjectSlug {
    /// Validates and wraps a project slug
    ///
    /// # Returns
    /// * `Ok(ProjectSlug)` - If the value is a valid slug (surrounding whitespace is ignored)
    /// * `Err(AppError::InvalidInput)` - If it is empty or contains invalid characters
    pub fn new(value: impl AsRef<str>) -> Result<Self, AppError> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(AppError::InvalidInput(
                "project slug must not be empty".to_string(),
            ));
        }
        if !SLUG_PATTERN.is_match(value) {
            return Err(AppError::InvalidInput(format!(
                "project slug '{value}' is not a valid host label"
            )));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the slug as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base URL of the project, `https://<slug>.projects.oryapis.com`
    #[must_use]
    pub fn project_url(&self) -> String {
        format!("{PROJECT_URL_PREFIX}{}{PROJECT_URL_SUFFIX}", self.0)
    }
}

impl fmt::Display for ProjectSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProjectSlug {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectSlug> for String {
    fn from(value: ProjectSlug) -> Self {
        value.0
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// A server the client can talk to
pub struct ServerConfiguration {
    /// Base URL of the server
    pub url: String,
    /// Optional description of the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

impl RestApiConfig {
    /// REST settings from `ORY_REST_TIMEOUT`, falling back to the default
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            timeout: get_env_or_default("ORY_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RateLimiterConfig {
    /// Limiter settings from `ORY_RATE_LIMIT_*`
    ///
    /// # Returns
    /// `None` unless at least one of the variables is set; unset ones take their default
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let max_requests = get_env_or_none::<u32>("ORY_RATE_LIMIT_MAX_REQUESTS");
        let period_seconds = get_env_or_none::<u64>("ORY_RATE_LIMIT_PERIOD_SECONDS");
        let burst_size = get_env_or_none::<u32>("ORY_RATE_LIMIT_BURST_SIZE");
        if max_requests.is_none() && period_seconds.is_none() && burst_size.is_none() {
            return None;
        }
        Some(Self {
            max_requests: max_requests.unwrap_or(DEFAULT_RATE_LIMIT_MAX_REQUESTS),
            period_seconds: period_seconds.unwrap_or(DEFAULT_RATE_LIMIT_PERIOD_SECONDS),
            burst_size: burst_size.unwrap_or(DEFAULT_RATE_LIMIT_BURST_SIZE),
        })
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Ory client
pub struct Config {
    /// Project the client is bound to
    pub project_slug: ProjectSlug,
    /// Servers known to the client; a project config holds exactly one
    pub servers: Vec<ServerConfiguration>,
    /// Index into `servers` of the server in use
    pub server_index: usize,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Client-side rate limit; `None` sends every call immediately
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limiter: Option<RateLimiterConfig>,
}

impl Config {
    /// Creates a configuration bound to the given project
    ///
    /// # Arguments
    /// * `project_slug` - The tenant slug, e.g. `playground-abc123`
    ///
    /// # Returns
    /// * `Ok(Config)` - With a single server `https://<slug>.projects.oryapis.com`,
    ///   the default timeout and no rate limit. The environment is not read.
    /// * `Err(AppError::InvalidInput)` - If the slug is invalid
    pub fn new(project_slug: impl AsRef<str>) -> Result<Self, AppError> {
        let project_slug = ProjectSlug::new(project_slug)?;
        let servers = vec![ServerConfiguration {
            url: project_slug.project_url(),
            description: Some(format!("Ory Network project {project_slug}")),
        }];
        Ok(Self {
            project_slug,
            servers,
            server_index: 0,
            rest_api: RestApiConfig::default(),
            rate_limiter: None,
        })
    }

    /// Creates a configuration from the `ORY_PROJECT_SLUG` environment variable
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// `ORY_REST_TIMEOUT` and `ORY_RATE_LIMIT_*` are honored here as well; the
    /// rate limit is only enabled when one of its variables is set.
    ///
    /// # Returns
    /// * `Ok(Config)` - If the variable is present and holds a valid slug
    /// * `Err(AppError::InvalidInput)` - If it is missing, empty or invalid
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let Some(slug) = get_env_or_none::<String>(PROJECT_SLUG_ENV) else {
            error!("{PROJECT_SLUG_ENV} not found in environment variables or .env file");
            return Err(AppError::InvalidInput(format!(
                "{PROJECT_SLUG_ENV} is not set"
            )));
        };

        let mut config = Self::new(slug)?;
        config.rest_api = RestApiConfig::from_env();
        config.rate_limiter = RateLimiterConfig::from_env();
        Ok(config)
    }

    /// Replaces the server list with a single custom base URL
    ///
    /// Useful for custom domains and local stub servers.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.servers = vec![ServerConfiguration {
            url: url.into(),
            description: None,
        }];
        self.server_index = 0;
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Enables client-side rate limiting of outbound calls
    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiterConfig) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }

    /// Base URL of the selected server, without trailing slash
    ///
    /// # Returns
    /// * `Ok(&str)` - The URL
    /// * `Err(AppError::InvalidInput)` - If `server_index` is out of range
    pub fn base_url(&self) -> Result<&str, AppError> {
        self.servers
            .get(self.server_index)
            .map(|server| server.url.trim_end_matches('/'))
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "server index {} out of range ({} servers configured)",
                    self.server_index,
                    self.servers.len()
                ))
            })
    }
}
