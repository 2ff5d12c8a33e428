//! Application configuration loaded from environment variables.
//!
//! All variables are optional:
//! - `TRADEDESK_SERVICE_URL` — base URL of the trade-processing service
//! - `TRADEDESK_USER_ID` — identity selected at startup
//! - `TRADEDESK_LOG_FILE` — where tracing output is written
//! - `TRADEDESK_LOG_LEVEL` — `trace`, `debug`, `info`, `warn` or `error`
//! - `TRADEDESK_TICK_MS` — UI tick interval in milliseconds

use tracing::Level;

/// Default local endpoint of the trade-processing service.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "tradedesk.log";

/// Default UI tick interval.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub ui: UiConfig,
}

/// Remote service settings.
#[derive(Debug)]
pub struct ServiceConfig {
    pub base_url: String,
    /// Identity active when the dashboard opens. Empty is a valid identity.
    pub initial_user_id: String,
}

/// Terminal front end and logging settings.
#[derive(Debug)]
pub struct UiConfig {
    pub log_file: String,
    pub log_level: Level,
    pub tick_ms: u64,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`TradedeskError::Config`](crate::TradedeskError::Config) if the
/// service URL is not an `http(s)` URL, the log level is unknown, or the
/// tick interval is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url =
        non_empty_var("TRADEDESK_SERVICE_URL").unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(crate::TradedeskError::Config(format!(
            "TRADEDESK_SERVICE_URL must start with http:// or https://, got {base_url:?}"
        )));
    }

    // Not filtered through `non_empty_var`: an empty identity is meaningful.
    let initial_user_id = std::env::var("TRADEDESK_USER_ID").unwrap_or_default();

    let log_file =
        non_empty_var("TRADEDESK_LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let log_level = match non_empty_var("TRADEDESK_LOG_LEVEL") {
        Some(raw) => raw.parse::<Level>().map_err(|_| {
            crate::TradedeskError::Config(format!("unknown TRADEDESK_LOG_LEVEL {raw:?}"))
        })?,
        None => Level::INFO,
    };

    let tick_ms = match non_empty_var("TRADEDESK_TICK_MS") {
        Some(raw) => match raw.parse::<u64>() {
            Ok(ms) if ms > 0 => ms,
            _ => {
                return Err(crate::TradedeskError::Config(format!(
                    "TRADEDESK_TICK_MS must be a positive integer, got {raw:?}"
                )));
            }
        },
        None => DEFAULT_TICK_MS,
    };

    Ok(AppConfig {
        service: ServiceConfig {
            base_url,
            initial_user_id,
        },
        ui: UiConfig {
            log_file,
            log_level,
            tick_ms,
        },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 5] = [
        "TRADEDESK_SERVICE_URL",
        "TRADEDESK_USER_ID",
        "TRADEDESK_LOG_FILE",
        "TRADEDESK_LOG_LEVEL",
        "TRADEDESK_TICK_MS",
    ];

    /// Serializes tests that touch the process environment.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    /// Sets exactly `vars` (clearing every other config variable), runs `f`,
    /// then restores the originals.
    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let originals: Vec<(&str, Option<String>)> = ALL_VARS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        for k in ALL_VARS {
            let value = vars.iter().find(|(name, _)| *name == k).map(|(_, v)| *v);
            // SAFETY: ENV_LOCK keeps other config tests from reading concurrently.
            unsafe {
                match value {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values under the same lock.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(&[], || {
            let config = fetch_config().unwrap();
            assert_eq!(config.service.base_url, DEFAULT_SERVICE_URL);
            assert_eq!(config.service.initial_user_id, "");
            assert_eq!(config.ui.log_file, DEFAULT_LOG_FILE);
            assert_eq!(config.ui.log_level, Level::INFO);
            assert_eq!(config.ui.tick_ms, DEFAULT_TICK_MS);
        });
    }

    #[test]
    fn loads_overrides_from_env() {
        with_env(
            &[
                ("TRADEDESK_SERVICE_URL", "https://trades.example.com"),
                ("TRADEDESK_USER_ID", "alice"),
                ("TRADEDESK_LOG_FILE", "/tmp/desk.log"),
                ("TRADEDESK_LOG_LEVEL", "debug"),
                ("TRADEDESK_TICK_MS", "100"),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.service.base_url, "https://trades.example.com");
                assert_eq!(config.service.initial_user_id, "alice");
                assert_eq!(config.ui.log_file, "/tmp/desk.log");
                assert_eq!(config.ui.log_level, Level::DEBUG);
                assert_eq!(config.ui.tick_ms, 100);
            },
        );
    }

    #[test]
    fn rejects_non_http_service_url() {
        with_env(&[("TRADEDESK_SERVICE_URL", "ftp://127.0.0.1")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("TRADEDESK_SERVICE_URL"));
        });
    }

    #[test]
    fn accepts_https_service_url() {
        with_env(&[("TRADEDESK_SERVICE_URL", "https://127.0.0.1:5000/")], || {
            let config = fetch_config().unwrap();
            assert_eq!(config.service.base_url, "https://127.0.0.1:5000/");
            assert!(crate::client::HttpTradeService::new(&config.service.base_url).is_ok());
        });
    }

    #[test]
    fn rejects_unknown_log_level() {
        with_env(&[("TRADEDESK_LOG_LEVEL", "loud")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("TRADEDESK_LOG_LEVEL"));
        });
    }

    #[test]
    fn rejects_zero_tick() {
        with_env(&[("TRADEDESK_TICK_MS", "0")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("TRADEDESK_TICK_MS"));
        });
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(
            &[
                ("TRADEDESK_SERVICE_URL", ""),
                ("TRADEDESK_LOG_FILE", ""),
                ("TRADEDESK_LOG_LEVEL", ""),
                ("TRADEDESK_TICK_MS", ""),
                ("TRADEDESK_USER_ID", ""),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.service.base_url, DEFAULT_SERVICE_URL);
                assert_eq!(config.service.initial_user_id, "");
                assert_eq!(config.ui.log_file, DEFAULT_LOG_FILE);
                assert_eq!(config.ui.tick_ms, DEFAULT_TICK_MS);
            },
        );
    }
}
