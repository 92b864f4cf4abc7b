/// Client handle and the login flow operation
pub mod client;
/// Application configuration module
pub mod config;
/// Cancellation and deadline carrier
pub mod context;
/// Service interfaces
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
