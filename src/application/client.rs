/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client handle for an Ory project
//!
//! The client is built once from an explicit [`Config`] and passed to whoever
//! needs it. Clones share the same connection pool and rate limiter.
//!
//! # Example
//! ```ignore
//! use ory_login_client::prelude::*;
//!
//! let client = Client::new(Config::new("playground-abc123")?)?;
//! let flow = get_login(&client, &Context::background(), flow_id).await?;
//! ```

use crate::application::config::Config;
use crate::application::context::Context;
use crate::application::interfaces::frontend::FrontendService;
use crate::constants::LOGIN_FLOW_PATH;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::GetLoginFlowRequest;
use crate::presentation::flow::LoginFlow;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Reusable handle through which API calls are issued
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from configuration
    ///
    /// # Returns
    /// * `Ok(Client)` - Ready to use, no request is made
    /// * `Err(AppError)` - If the HTTP layer cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client for the project named by `ORY_PROJECT_SLUG`
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - If the variable is missing or invalid
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::from_env()?)
    }

    /// The configuration this client is bound to
    #[must_use]
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }
}

#[async_trait]
impl FrontendService for Client {
    async fn get_login_flow(
        &self,
        ctx: &Context,
        request: &GetLoginFlowRequest,
    ) -> Result<LoginFlow, AppError> {
        request.validate()?;
        info!("Getting login flow: {}", request.id);

        let mut headers = vec![("Accept", "application/json")];
        if let Some(cookie) = &request.cookie {
            headers.push(("Cookie", cookie.as_str()));
        }

        let flow: LoginFlow = self
            .http_client
            .get(ctx, LOGIN_FLOW_PATH, &request.query(), headers)
            .await?;
        debug!("Login flow {} obtained, expires at {}", flow.id, flow.expires_at);
        Ok(flow)
    }
}

/// Retrieves the current state of a login flow by identifier
///
/// Issues exactly one request bounded by `ctx`. Any failure is returned as is.
///
/// # Arguments
/// * `service` - The client handle, or any other [`FrontendService`]
/// * `ctx` - Cancellation and deadline for the call
/// * `flow_id` - Id of the login flow
///
/// # Returns
/// * `Ok(LoginFlow)` - The flow as currently seen by the service
/// * `Err(AppError)` - Invalid id, transport failure, non-success status,
///   undecodable body, or an ended context
pub async fn get_login<S>(service: &S, ctx: &Context, flow_id: &str) -> Result<LoginFlow, AppError>
where
    S: FrontendService + ?Sized,
{
    service
        .get_login_flow(ctx, &GetLoginFlowRequest::new(flow_id))
        .await
}
