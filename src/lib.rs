/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Ory Login Client
//!
//! A small async client for the hosted Ory identity service. It is bound to a
//! single project (`https://<slug>.projects.oryapis.com`) and fetches the current
//! state of a self-service login flow by identifier.
//!
//! ## Usage
//!
//! ```ignore
//! use ory_login_client::prelude::*;
//!
//! let config = Config::new("my-project")?;
//! let client = Client::new(config)?;
//!
//! let ctx = Context::with_timeout(std::time::Duration::from_secs(5));
//! let flow = get_login(&client, &ctx, "9f425a8d-7efc-4768-8f23-7647a74fdf13").await?;
//! println!("{}", flow.ui);
//! ```
//!
//! The client holds no mutable domain state, so a single instance can be cloned
//! and shared between tasks.

/// Client, configuration, execution context and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP layer, request and error-body models
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Login flow and UI models returned by the service
pub mod presentation;
/// Environment, logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
