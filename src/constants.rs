/// User agent string sent with every request to identify this client
pub const USER_AGENT: &str = concat!("ory-login-client/", env!("CARGO_PKG_VERSION"));
/// Environment variable holding the project slug
pub const PROJECT_SLUG_ENV: &str = "ORY_PROJECT_SLUG";
/// Scheme and host suffix of hosted Ory projects; the slug goes in between
pub const PROJECT_URL_PREFIX: &str = "https://";
/// Host suffix appended after the project slug
pub const PROJECT_URL_SUFFIX: &str = ".projects.oryapis.com";
/// Path of the "get login flow" endpoint
pub const LOGIN_FLOW_PATH: &str = "self-service/login/flows";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default number of requests allowed per rate limiter period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 60;
/// Default rate limiter period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Default burst size for the rate limiter
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;
/// Polling interval in milliseconds used while waiting on the rate limiter
pub const RATE_LIMIT_POLL_MS: u64 = 10;
