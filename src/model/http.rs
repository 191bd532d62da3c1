/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{JSON_CONTENT_TYPE, USER_AGENT};
use crate::error::{ApiError, AppError};
use crate::model::filters::QueryParams;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, Request, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Whether `status` counts as success; only 200 and 201 do
#[must_use]
pub fn is_success(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED
}

/// Authenticated HTTP client for the Veem API
///
/// Builds requests against the configured origin, attaches the bearer token
/// (refreshing it first when needed), sends them and classifies the
/// response.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
    rate_limiter: RateLimiter,
}

impl HttpClient {
    /// Creates a new client and acquires the first token
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the credentials are rejected or the token endpoint is unreachable
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        client.auth.acquire().await?;
        Ok(client)
    }

    /// Creates a new client without requesting a token
    ///
    /// The first token is acquired by the first authenticated request.
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);
        let auth = Arc::new(Auth::new(config.clone())?);

        Ok(Self {
            auth,
            http_client,
            config,
            rate_limiter,
        })
    }

    /// Client configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Token manager used by this client
    #[must_use]
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Absolute URL of a path relative to the configured origin
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url,
            path.trim_start_matches('/')
        )
    }

    /// Starts a request for `path`
    ///
    /// No auth, accept or content-type header is set here; the sending
    /// methods add them.
    #[must_use]
    pub fn build(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client.request(method, self.url(path))
    }

    /// Makes a GET request with the given query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T, AppError> {
        let request = with_query(self.build(Method::GET, path), query);
        self.send_and_decode(request).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
        body: &B,
    ) -> Result<T, AppError> {
        let payload = serde_json::to_vec(body)?;
        let request = with_query(self.build(Method::POST, path), query)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(payload);
        self.send_and_decode(request).await
    }

    /// Makes a POST request without a body, as used by resource actions
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send_and_decode(self.build(Method::POST, path)).await
    }

    /// Sends an authenticated request and decodes the JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - Decoded body of a 200 or 201 response
    /// * `Err(AppError::Api)` - Any other status
    /// * `Err(AppError::Json)` - The body does not match `T`
    pub async fn send_and_decode<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, AppError> {
        let response = self.dispatch(request, JSON_CONTENT_TYPE).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            error!("Failed to decode response: {}", e);
            debug!("Undecodable body: {}", String::from_utf8_lossy(&body));
            AppError::Json(e)
        })
    }

    /// Sends an authenticated request and hands back the live response
    ///
    /// The body is not read; the caller streams and drops it.
    pub async fn send_raw(
        &self,
        request: RequestBuilder,
        accept: &str,
    ) -> Result<Response, AppError> {
        self.dispatch(request, accept).await
    }

    async fn dispatch(&self, request: RequestBuilder, accept: &str) -> Result<Response, AppError> {
        let mut request = request.build()?;

        // Token check follows the throttle wait
        self.rate_limiter.wait().await;
        self.authorize(&mut request, accept).await?;
        debug!("{} {}", request.method(), request.url());

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if is_success(status) {
            return Ok(response);
        }

        let body = response.bytes().await?;
        let err = ApiError::from_body(&body);
        error!("Request failed with status {}: {}", status, err);
        Err(AppError::Api(err))
    }

    async fn authorize(&self, request: &mut Request, accept: &str) -> Result<(), AppError> {
        let token = self.auth.ensure_valid().await?;

        let headers = request.headers_mut();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&token.authorization_header())?,
        );
        headers.insert(ACCEPT, HeaderValue::from_str(accept)?);
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }
        Ok(())
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.rest_api.base_url)
            .field("rate_limiter", &self.rate_limiter)
            .finish()
    }
}

fn with_query(request: RequestBuilder, query: &QueryParams) -> RequestBuilder {
    if query.is_empty() {
        request
    } else {
        request.query(query.pairs())
    }
}
