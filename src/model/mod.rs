/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// HTTP request utilities with rate limiting and context bounds
pub mod http;
/// Request models for API calls
pub mod requests;
/// Error payloads returned by the service
pub mod responses;
