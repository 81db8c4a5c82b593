//! Environment variable parsing utilities.
//!
//! Configuration in this workspace is layered: built-in defaults, then
//! environment variables, then explicit flags. These helpers cover the
//! environment layer.
//!
//! # Example
//!
//! ```
//! use sui_profile_types::env_utils::{env_nonempty, env_var_or};
//!
//! let timeout: u64 = env_var_or("SUI_RPC_TIMEOUT_SECS", 30);
//! let rpc_url: Option<String> = env_nonempty("SUI_RPC_URL");
//! ```

use std::str::FromStr;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is not set or cannot be parsed.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Parse an environment variable with a default value.
///
/// Returns the default if the variable is not set or cannot be parsed.
pub fn env_var_or<T: FromStr>(key: &str, default: T) -> T {
    env_var(key).unwrap_or(default)
}

/// Read an environment variable as a trimmed string, treating blank values as unset.
pub fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
