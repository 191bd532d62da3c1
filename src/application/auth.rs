/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! OAuth token lifecycle
//!
//! Exchanges the client credentials for a bearer token and keeps exactly one
//! live token per client. The token is checked right before every
//! authenticated request and replaced when it is within the safety margin
//! of its expiry; there is no background refresh.

use crate::application::config::Config;
use crate::constants::{JSON_CONTENT_TYPE, TOKEN_PATH, TOKEN_SCOPE, USER_AGENT};
use crate::error::{ApiError, AppError};
use crate::model::auth::{AccessToken, TokenResponse};
use crate::model::http::is_success;
use chrono::Utc;
use reqwest::Client;
use reqwest::header::ACCEPT;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info};

/// Token manager for the Veem API
///
/// Safe to share between tasks: the check-then-refresh sequence runs under
/// a lock, so callers racing on an expiring token cause a single refresh.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    token: RwLock<Option<AccessToken>>,
    refresh: Mutex<()>,
}

impl Auth {
    /// Creates a new token manager; no token is requested yet
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            config,
            client,
            token: RwLock::new(None),
            refresh: Mutex::new(()),
        })
    }

    /// Requests a new token from the token endpoint and makes it the live one
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - The freshly issued token
    /// * `Err(AppError::Authentication)` - If the endpoint rejects the credentials
    pub async fn acquire(&self) -> Result<AccessToken, AppError> {
        let token = self.request_token().await?;
        *self.token.write().await = Some(token.clone());
        Ok(token)
    }

    /// Returns a token that is valid for at least the safety margin,
    /// refreshing the live one first if needed
    pub async fn ensure_valid(&self) -> Result<AccessToken, AppError> {
        if let Some(token) = self.valid_token().await {
            return Ok(token);
        }

        let _guard = self.refresh.lock().await;
        // Another caller may have refreshed while we waited for the lock
        if let Some(token) = self.valid_token().await {
            return Ok(token);
        }

        info!("Access token missing or about to expire, requesting a new one");
        self.acquire().await
    }

    /// The live token, whether or not it is still valid
    pub async fn current_token(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }

    /// Drops the live token; the next request acquires a new one
    pub async fn clear(&self) {
        *self.token.write().await = None;
    }

    async fn valid_token(&self) -> Option<AccessToken> {
        self.token
            .read()
            .await
            .as_ref()
            .filter(|token| token.is_valid())
            .cloned()
    }

    async fn request_token(&self) -> Result<AccessToken, AppError> {
        let url = format!("{}/{}", self.config.rest_api.base_url, TOKEN_PATH);
        debug!("Requesting access token from: {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(
                &self.config.credentials.client_id,
                Some(&self.config.credentials.client_secret),
            )
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .form(&[("grant_type", "client_credentials"), ("scope", TOKEN_SCOPE)])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !is_success(status) {
            let err = ApiError::from_body(&body);
            error!("Token request failed with status {}: {}", status, err);
            return Err(AppError::Authentication(err));
        }

        let issued_at = Utc::now();
        let token_response: TokenResponse = serde_json::from_slice(&body)?;
        let token = AccessToken::from_response(token_response, issued_at);

        info!(
            "✓ Access token acquired, expires in {} seconds",
            token.seconds_until_expiry()
        );
        Ok(token)
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("base_url", &self.config.rest_api.base_url)
            .finish()
    }
}
