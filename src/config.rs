//! Process configuration for bookgate services.
//!
//! Settings are read once from the environment at service construction.
//! Every field is optional; unset or empty variables fall back to the
//! defaults baked into each service (platform TLS trust, public API base
//! URLs). Environment-file loading (dotenv and friends) belongs to the
//! process entry point, not this crate.

use std::env;
use std::path::PathBuf;

/// Environment variable for the book-search API base URL override.
pub const ENV_BOOKS_API_URL: &str = "BOOKS_API_URL";
/// Environment variable controlling outbound certificate validation.
pub const ENV_TLS_REJECT_UNAUTHORIZED: &str = "TLS_REJECT_UNAUTHORIZED";
/// Environment variable pointing at a CA bundle file.
pub const ENV_TLS_CA_FILE: &str = "TLS_CA_FILE";
/// Environment variable carrying an inline CA certificate (PEM or base64).
pub const ENV_TLS_CA_CERT: &str = "TLS_CA_CERT";
/// Environment variable for the time-tracking API base URL override.
pub const ENV_TIMETRACK_API_URL: &str = "TIMETRACK_API_URL";
/// Environment variable for the time-tracking API key.
pub const ENV_TIMETRACK_API_KEY: &str = "TIMETRACK_API_KEY";

/// Configuration inputs consumed by bookgate services.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Base URL override for the book-search API.
    pub books_base_url: Option<String>,
    /// Whether outbound certificate validation is enabled. `Some(false)`
    /// disables verification; `None` means "not configured" (validate).
    pub reject_unauthorized: Option<bool>,
    /// Path to a CA bundle file, relative to the process working directory.
    pub ca_file: Option<PathBuf>,
    /// Inline CA certificate: literal PEM text or base64-encoded bytes.
    /// Takes priority over `ca_file` when both are set.
    pub ca_cert: Option<String>,
    /// Base URL override for the time-tracking API.
    pub timetrack_base_url: Option<String>,
    /// API key for the time-tracking API.
    pub timetrack_api_key: Option<String>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self {
            books_base_url: read_var(ENV_BOOKS_API_URL),
            reject_unauthorized: read_var(ENV_TLS_REJECT_UNAUTHORIZED)
                .as_deref()
                .and_then(parse_bool_flag),
            ca_file: read_var(ENV_TLS_CA_FILE).map(PathBuf::from),
            ca_cert: read_var(ENV_TLS_CA_CERT),
            timetrack_base_url: read_var(ENV_TIMETRACK_API_URL),
            timetrack_api_key: read_var(ENV_TIMETRACK_API_KEY),
        }
    }
}

/// Read an environment variable, treating empty values as unset.
fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse a boolean-like flag value.
///
/// Accepts `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`,
/// case-insensitively. Anything else is treated as unset.
pub fn parse_bool_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_flag_truthy_values() {
        for v in ["true", "TRUE", "1", "yes", "Yes", "on", " ON "] {
            assert_eq!(parse_bool_flag(v), Some(true), "value: {v:?}");
        }
    }

    #[test]
    fn bool_flag_falsy_values() {
        for v in ["false", "False", "0", "no", "NO", "off", " off "] {
            assert_eq!(parse_bool_flag(v), Some(false), "value: {v:?}");
        }
    }

    #[test]
    fn bool_flag_garbage_is_unset() {
        for v in ["", "maybe", "2", "enabled", "nope"] {
            assert_eq!(parse_bool_flag(v), None, "value: {v:?}");
        }
    }

    #[test]
    fn default_settings_are_empty() {
        let settings = Settings::default();
        assert!(settings.books_base_url.is_none());
        assert!(settings.reject_unauthorized.is_none());
        assert!(settings.ca_file.is_none());
        assert!(settings.ca_cert.is_none());
    }
}
