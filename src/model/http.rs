/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::context::Context;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::{AppError, ResponseError};
use reqwest::Client as HttpInternalClient;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Low level HTTP client bound to one Ory project
///
/// Owns the connection pool, the optional rate limiter and the resolved configuration.
/// It holds no per-call state, so one instance serves any number of concurrent
/// callers.
#[derive(Debug)]
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Creates a new HTTP client from configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to use
    /// * `Err(AppError)` - If the configured server is missing or the TLS backend fails to initialize
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.base_url()?;
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout.max(1)))
            .build()?;
        let rate_limiter = config.rate_limiter.as_ref().map(RateLimiter::new);

        Ok(Self {
            http_client,
            config: Arc::new(config),
            rate_limiter,
        })
    }

    /// The configuration this client was built from
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes a GET request and decodes the JSON body
    ///
    /// # Arguments
    /// * `ctx` - Bounds the whole call, including the wait on the rate limiter
    /// * `path` - Endpoint path relative to the server base URL
    /// * `query` - Query parameters
    /// * `headers` - Extra headers
    pub async fn get<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        path: &str,
        query: &[(&str, &str)],
        headers: Vec<(&str, &str)>,
    ) -> Result<T, AppError> {
        let url = self.url(path)?;
        let response = make_http_request(
            &self.http_client,
            self.rate_limiter.as_ref(),
            ctx,
            Method::GET,
            &url,
            headers,
            query,
        )
        .await?;
        ctx.run(parse_response(response)).await
    }

    fn url(&self, path: &str) -> Result<String, AppError> {
        let path = path.trim_start_matches('/');
        Ok(format!("{}/{}", self.config.base_url()?, path))
    }
}

/// Decodes a JSON response body
///
/// The body is read fully before decoding so that schema mismatches surface as
/// [`AppError::Json`] rather than as transport errors.
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Makes an HTTP request bounded by a context and, when given, a shared rate limiter
///
/// The request is sent exactly once. Any non-success status is returned as
/// [`AppError::Api`] carrying the status and body; nothing is retried.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter, `None` to send immediately
/// * `ctx` - Cancellation and deadline for the call
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query parameters appended to the URL
///
/// # Example
///
/// ```ignore
/// let response = make_http_request(
///     &client,
///     None,
///     &Context::with_timeout(Duration::from_secs(5)),
///     Method::GET,
///     "https://playground.projects.oryapis.com/self-service/login/flows",
///     vec![("Accept", "application/json")],
///     &[("id", flow_id)],
/// ).await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    rate_limiter: Option<&RateLimiter>,
    ctx: &Context,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(&str, &str)],
) -> Result<Response, AppError> {
    if let Some(limiter) = rate_limiter {
        limiter.wait_within(ctx).await?;
    }

    debug!("{} {}", method, url);

    let mut request = client.request(method, url).query(query);
    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    let response = ctx
        .run(async { request.send().await.map_err(AppError::from) })
        .await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = ctx
        .run(async { response.text().await.map_err(AppError::from) })
        .await?;
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::Api(ResponseError::new(status, body)))
}
