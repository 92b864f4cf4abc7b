/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Ory Login Client Prelude
//!
//! Imports the types needed to fetch a login flow in one line.
//!
//! ## Usage
//!
//! ```rust
//! use ory_login_client::prelude::*;
//!
//! let config = Config::new("playground-abc123").unwrap();
//! assert_eq!(
//!     config.base_url().unwrap(),
//!     "https://playground-abc123.projects.oryapis.com"
//! );
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Ory client
pub use crate::application::config::{
    Config, ProjectSlug, RateLimiterConfig, RestApiConfig, ServerConfiguration,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, ResponseError};

/// Error payloads returned by the service
pub use crate::model::responses::{ErrorGeneric, GenericError};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client handle and the login flow operation
pub use crate::application::client::{Client, get_login};

/// Execution context
pub use crate::application::context::Context;

/// Frontend service trait
pub use crate::application::interfaces::frontend::FrontendService;

/// Request parameters
pub use crate::model::requests::GetLoginFlowRequest;

// ============================================================================
// FLOW MODELS
// ============================================================================

/// Login flow and UI models
pub use crate::presentation::flow::{
    AuthenticatorAssuranceLevel, FlowType, LoginFlow, LoginFlowState,
};
pub use crate::presentation::ui::{
    UiContainer, UiNode, UiNodeMeta, UiNodeType, UiText, UiTextType,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use std::sync::Arc;
pub use tokio;
pub use tokio_util::sync::CancellationToken;
pub use tracing::{debug, error, info, warn};
