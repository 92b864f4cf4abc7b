/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the Ory login client
//!
//! Every failure of a remote call is surfaced through [`AppError`] without any
//! retry. Non-success responses keep their status, raw body and, when the body
//! follows the service's generic error shape, the decoded error.

use crate::model::responses::GenericError;
use reqwest::StatusCode;
use std::fmt;

/// A non-success HTTP response returned by the identity service
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseError {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Raw response body
    pub body: String,
    /// Decoded error payload, if the body had the generic error shape
    pub error: Option<GenericError>,
}

impl ResponseError {
    /// Builds a response error, decoding the body when possible
    #[must_use]
    pub fn new(status: StatusCode, body: String) -> Self {
        let error = GenericError::from_body(&body);
        Self {
            status,
            body,
            error,
        }
    }

    /// Human readable message for the failure
    #[must_use]
    pub fn message(&self) -> String {
        match &self.error {
            Some(err) => err.message.clone(),
            None if self.body.is_empty() => self
                .status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
            None => self.body.clone(),
        }
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message())
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport failure while talking to the service
    Network(reqwest::Error),
    /// Response body could not be decoded
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
    /// The service answered with a non-success status
    Api(ResponseError),
    /// Caller supplied an invalid value
    InvalidInput(String),
    /// The execution context was cancelled
    Cancelled,
    /// The execution context deadline elapsed
    DeadlineExceeded,
}

impl AppError {
    /// HTTP status of the failed call, if the service answered at all
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api(err) => Some(err.status),
            AppError::Network(err) => err.status(),
            _ => None,
        }
    }

    /// True when the call was abandoned because its context ended
    #[must_use]
    pub fn is_context_error(&self) -> bool {
        matches!(self, AppError::Cancelled | AppError::DeadlineExceeded)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Api(e) => write!(f, "api error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Cancelled => write!(f, "request cancelled"),
            AppError::DeadlineExceeded => write!(f, "deadline exceeded"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<ResponseError> for AppError {
    fn from(err: ResponseError) -> Self {
        AppError::Api(err)
    }
}
