use crate::application::context::Context;
use crate::error::AppError;
use crate::model::requests::GetLoginFlowRequest;
use crate::presentation::flow::LoginFlow;
use async_trait::async_trait;

/// Interface for the self-service frontend API
#[async_trait]
pub trait FrontendService: Send + Sync {
    /// Gets a login flow
    ///
    /// # Arguments
    /// * `ctx` - Cancellation and deadline for the call
    /// * `request` - Flow id and optional cookie header
    ///
    /// # Returns
    /// * The login flow as currently seen by the service
    async fn get_login_flow(
        &self,
        ctx: &Context,
        request: &GetLoginFlowRequest,
    ) -> Result<LoginFlow, AppError>;
}
