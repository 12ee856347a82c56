/// Utility Functions for Configuration and Timestamps
///
/// This module provides helpers for reading environment variables with
/// defaults and for formatting timestamps. All timestamps produced by the
/// server go through these helpers so every endpoint formats time the same
/// way.

use chrono::{DateTime, SecondsFormat, Utc};

/// Get environment variable value with a default fallback.
///
/// Retrieves an environment variable by key, returning the default value if
/// the variable is not set.
///
/// # Arguments
/// * `key` - Environment variable name to look up
/// * `default` - Default value to return if the environment variable is not set
///
/// # Returns
/// The environment variable value if set, otherwise the default value
///
/// # Example
/// ```rust
/// use simple_mcp_server::core::utils::get_env_var;
/// let port = get_env_var("PORT", "8000");
/// ```
pub fn get_env_var(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Format an instant as an ISO 8601 / RFC 3339 string in UTC.
///
/// Microsecond precision, "Z" suffix. Every timestamp field in a response
/// body uses this format.
pub fn iso8601(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Convert an instant to fractional seconds since the Unix epoch.
pub fn unix_seconds(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_micros() as f64 / 1_000_000.0
}
