/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads a non-blank environment variable
///
/// Variables that are unset, not valid unicode, or only whitespace are treated
/// as absent.
fn read_env(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value used when the variable is absent, blank or unparsable
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match read_env(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}: {} ({:?}), using default", env_var, val, e);
            default
        }),
        None => default,
    }
}

/// Gets an environment variable and parses it, returning None if absent, blank or invalid
///
/// # Arguments
/// * `env_var` - Name of the environment variable
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    read_env(env_var).and_then(|val| val.parse::<T>().ok())
}
