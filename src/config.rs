use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::Duration;

use crate::session::{SessionPolicy, DEFAULT_SESSION_TTL_DAYS};

/// Application-level constants
pub const APP_NAME: &str = "Clinic Portal";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PORTAL_ADDR: &str = "127.0.0.1:8787";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "clinic_portal_lib=info,clinic_portal=info,tower_http=warn"
}

/// Get the application data directory.
/// Platform local data dir, falling back to the home directory and then the
/// working directory.
pub fn app_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clinic-portal")
}

/// Where the signed-in session is kept between runs.
pub fn default_session_file() -> PathBuf {
    app_data_dir().join("session.json")
}

/// Runtime settings, read from `CLINIC_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
    pub api_timeout_secs: u64,
    pub session_ttl_days: i64,
    pub session_file: PathBuf,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            session_ttl_days: DEFAULT_SESSION_TTL_DAYS,
            session_file: default_session_file(),
        }
    }
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Invalid values are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = lookup("CLINIC_API_BASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_base_url);

        let session_file = lookup("CLINIC_SESSION_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.session_file);

        Self {
            api_base_url,
            bind_addr: parse_or_default(&lookup, "CLINIC_PORTAL_ADDR", defaults.bind_addr, |_| true),
            api_timeout_secs: parse_or_default(
                &lookup,
                "CLINIC_API_TIMEOUT_SECS",
                defaults.api_timeout_secs,
                |secs| *secs > 0,
            ),
            session_ttl_days: parse_or_default(
                &lookup,
                "CLINIC_SESSION_TTL_DAYS",
                defaults.session_ttl_days,
                |days| *days > 0,
            ),
            session_file,
        }
    }

    pub fn session_policy(&self) -> SessionPolicy {
        SessionPolicy::new(Duration::days(self.session_ttl_days))
    }
}

fn parse_or_default<T: FromStr + std::fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            tracing::warn!(key, value = %raw, fallback = %default, "Ignoring invalid setting");
            default
        }
    }
}
