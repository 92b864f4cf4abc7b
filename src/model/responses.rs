/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope of the generic error payload returned by the identity service
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorGeneric {
    /// The wrapped error
    pub error: GenericError,
}

/// Generic error details returned on non-success responses
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GenericError {
    /// HTTP status code echoed by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Debug information, only present in development environments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
    /// Further error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Stable error identifier, e.g. `self_service_flow_expired`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Error message
    pub message: String,
    /// A human-readable reason for the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Request id, useful when contacting support
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
    /// Status description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl GenericError {
    /// Decodes an error body, accepting both the enveloped and the flat shape
    ///
    /// # Returns
    /// `None` when the body is not a recognizable error payload
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        if let Ok(envelope) = serde_json::from_str::<ErrorGeneric>(body) {
            return Some(envelope.error);
        }
        serde_json::from_str::<GenericError>(body).ok()
    }

    /// Flow id the service suggests using instead, when it replaced an expired flow
    #[must_use]
    pub fn use_flow_id(&self) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|d| d.get("use_flow_id"))
            .and_then(Value::as_str)
    }
}
