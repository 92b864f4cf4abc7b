/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Parameters of the "get login flow" call
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetLoginFlowRequest {
    /// The login flow id, usually taken from the `?flow=` query of the login page
    pub id: String,
    /// Cookie header of the browser request, needed for browser flows
    /// when the call is made server-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
}

impl GetLoginFlowRequest {
    /// Creates a request for the given flow id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cookie: None,
        }
    }

    /// Forwards the given cookie header with the request
    #[must_use]
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    /// Checks the request before any network I/O
    ///
    /// # Returns
    /// * `Ok(())` - If the flow id is non-empty
    /// * `Err(AppError::InvalidInput)` - Otherwise
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "login flow id must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Query parameters for the request
    #[must_use]
    pub fn query(&self) -> Vec<(&str, &str)> {
        vec![("id", self.id.as_str())]
    }
}
