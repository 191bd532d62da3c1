use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS, LIVE_URL, SANDBOX_URL};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

/// Veem environment the client talks to
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Environment {
    /// Sandbox environment, for integration work
    #[default]
    Sandbox,
    /// Live environment, moves real money
    Live,
}

impl Environment {
    /// Origin of the environment
    #[must_use]
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_URL,
            Environment::Live => LIVE_URL,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
/// OAuth client credentials issued by Veem
pub struct Credentials {
    /// Client identifier
    pub client_id: String,
    /// Client secret
    pub client_secret: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Main configuration for the Veem API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Number of items to retrieve per page in list requests
    pub page_size: i32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Environment the origin was derived from
    pub environment: Environment,
    /// Origin every path is resolved against
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            period_seconds: 60,
            burst_size: 20,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first when present. `VEEM_CLIENT_ID` and
    /// `VEEM_CLIENT_SECRET` hold the credentials, `VEEM_SANDBOX` selects the
    /// environment (sandbox unless set to false) and `VEEM_BASE_URL`
    /// overrides the origin altogether.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default("VEEM_CLIENT_ID", String::from("default_client_id"));
        let client_secret =
            get_env_or_default("VEEM_CLIENT_SECRET", String::from("default_client_secret"));

        if client_id == "default_client_id" {
            error!("VEEM_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret == "default_client_secret" {
            error!("VEEM_CLIENT_SECRET not found in environment variables or .env file");
        }

        let environment = if get_env_flag("VEEM_SANDBOX", true) {
            Environment::Sandbox
        } else {
            Environment::Live
        };
        let base_url = get_env_or_none::<String>("VEEM_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| environment.base_url().to_string());

        let defaults = RateLimiterConfig::default();
        Config {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            rest_api: RestApiConfig {
                environment,
                base_url,
                timeout: get_env_or_default("VEEM_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "VEEM_RATE_LIMIT_MAX_REQUESTS",
                    defaults.max_requests,
                ),
                period_seconds: get_env_or_default(
                    "VEEM_RATE_LIMIT_PERIOD_SECONDS",
                    defaults.period_seconds,
                ),
                burst_size: get_env_or_default("VEEM_RATE_LIMIT_BURST_SIZE", defaults.burst_size),
            },
            page_size: get_env_or_default("VEEM_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    /// Creates a configuration for the given credentials and environment,
    /// without reading the process environment
    pub fn with_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Config {
            credentials: Credentials::new(client_id, client_secret),
            rest_api: RestApiConfig {
                environment,
                base_url: environment.base_url().to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            rate_limiter: RateLimiterConfig::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Points the client at another origin, e.g. a proxy or a mock server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether the client targets the sandbox environment
    #[must_use]
    pub fn is_sandbox(&self) -> bool {
        self.rest_api.environment == Environment::Sandbox
    }
}
