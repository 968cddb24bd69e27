//! Application configuration loaded from environment variables.
//!
//! All variables are optional:
//! - `PRICELOCK_API_URL` — overrides the default CoinGecko endpoint
//! - `PRICELOCK_POLL_MS` — idle poll interval in milliseconds
//! - `PRICELOCK_DURATION_SECS` — starting round length, clamped to 15..=60
//! - `PRICELOCK_STRICT_QUOTES` — set to `1`/`true` to disable synthesized
//!   fallback quotes after a fetch failure
//! - `PRICELOCK_LOG` — path of a log file (stdout belongs to the TUI)

use crate::round;

/// Default public quote endpoint.
const DEFAULT_API_URL: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd";

/// Default idle poll interval in milliseconds.
const DEFAULT_POLL_MS: u64 = 500;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub feed: FeedConfig,
    /// Starting round length in seconds, already clamped to the valid range.
    pub duration_secs: u64,
    /// Log file path, if logging was requested.
    pub log_file: Option<String>,
}

/// Price feed configuration values.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub api_url: String,
    pub poll_interval_ms: u64,
    /// When set, fetch failures produce a notice instead of a synthesized
    /// quote.
    pub strict_quotes: bool,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`PricelockError::Config`](crate::PricelockError::Config) if a
/// numeric variable is set to something that does not parse.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let api_url = non_empty_var("PRICELOCK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let poll_interval_ms = parsed_var("PRICELOCK_POLL_MS")?.unwrap_or(DEFAULT_POLL_MS);
    let duration_secs = round::clamp_duration(
        parsed_var("PRICELOCK_DURATION_SECS")?.unwrap_or(round::DEFAULT_DURATION_SECS),
    );
    let strict_quotes = non_empty_var("PRICELOCK_STRICT_QUOTES")
        .is_some_and(|v| matches!(v.as_str(), "1" | "true" | "yes"));
    let log_file = non_empty_var("PRICELOCK_LOG");

    Ok(AppConfig {
        feed: FeedConfig {
            api_url,
            poll_interval_ms,
            strict_quotes,
        },
        duration_secs,
        log_file,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Parses an environment variable as `u64`, treating empty as absent.
fn parsed_var(name: &str) -> crate::Result<Option<u64>> {
    match non_empty_var(name) {
        None => Ok(None),
        Some(raw) => raw.parse::<u64>().map(Some).map_err(|e| {
            crate::PricelockError::Config(format!("{name} must be an integer, got {raw:?}: {e}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    ///
    /// # Safety
    ///
    /// Tests using this helper must run with `--test-threads=1` or otherwise
    /// ensure no other threads read these env vars concurrently.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: config tests run single-threaded (see test runner config).
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values, same single-threaded context.
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
        with_env(
            &[
                ("PRICELOCK_API_URL", None),
                ("PRICELOCK_POLL_MS", None),
                ("PRICELOCK_DURATION_SECS", None),
                ("PRICELOCK_STRICT_QUOTES", None),
                ("PRICELOCK_LOG", None),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.feed.api_url, DEFAULT_API_URL);
                assert_eq!(config.feed.poll_interval_ms, DEFAULT_POLL_MS);
                assert_eq!(config.duration_secs, round::DEFAULT_DURATION_SECS);
                assert!(!config.feed.strict_quotes);
                assert!(config.log_file.is_none());
            },
        );
    }

    #[test]
    fn duration_from_env_is_clamped() {
        with_env(&[("PRICELOCK_DURATION_SECS", Some("5"))], || {
            let config = fetch_config().unwrap();
            assert_eq!(config.duration_secs, round::MIN_DURATION_SECS);
        });
        with_env(&[("PRICELOCK_DURATION_SECS", Some("600"))], || {
            let config = fetch_config().unwrap();
            assert_eq!(config.duration_secs, round::MAX_DURATION_SECS);
        });
    }

    #[test]
    fn rejects_unparseable_poll_interval() {
        with_env(&[("PRICELOCK_POLL_MS", Some("soon"))], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("PRICELOCK_POLL_MS"));
        });
    }

    #[test]
    fn strict_quotes_flag_variants() {
        for value in ["1", "true", "yes"] {
            with_env(&[("PRICELOCK_STRICT_QUOTES", Some(value))], || {
                assert!(fetch_config().unwrap().feed.strict_quotes);
            });
        }
        with_env(&[("PRICELOCK_STRICT_QUOTES", Some("0"))], || {
            assert!(!fetch_config().unwrap().feed.strict_quotes);
        });
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(
            &[
                ("PRICELOCK_API_URL", Some("")),
                ("PRICELOCK_POLL_MS", Some("")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.feed.api_url, DEFAULT_API_URL);
                assert_eq!(config.feed.poll_interval_ms, DEFAULT_POLL_MS);
            },
        );
    }
}
