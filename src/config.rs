// src/config.rs

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime settings, read from `WISEPICK_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    /// How long the simulated lookup takes.
    pub search_delay: Duration,
    /// Sessions idle for longer than this are dropped.
    pub session_ttl: Duration,
    /// Shown in the search view greeting.
    pub user_name: String,
    /// Directory holding `htmx.js`.
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            search_delay: Duration::from_millis(2000),
            session_ttl: Duration::from_secs(60 * 60 * 24),
            user_name: "Alex".to_string(),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("WISEPICK_ADDR") {
            cfg.addr = parse(&v, "WISEPICK_ADDR", "socket address")?;
        }
        if let Some(v) = lookup("WISEPICK_WORKERS") {
            cfg.max_workers = parse(&v, "WISEPICK_WORKERS", "worker count")?;
            if cfg.max_workers == 0 {
                return Err(ConfigError::Invalid {
                    var: "WISEPICK_WORKERS",
                    expected: "worker count",
                    value: v,
                });
            }
        }
        if let Some(v) = lookup("WISEPICK_SEARCH_DELAY_MS") {
            cfg.search_delay =
                Duration::from_millis(parse(&v, "WISEPICK_SEARCH_DELAY_MS", "millisecond count")?);
        }
        if let Some(v) = lookup("WISEPICK_SESSION_TTL_SECS") {
            cfg.session_ttl =
                Duration::from_secs(parse(&v, "WISEPICK_SESSION_TTL_SECS", "second count")?);
        }
        if let Some(v) = lookup("WISEPICK_STATIC_DIR") {
            if !v.trim().is_empty() {
                cfg.static_dir = PathBuf::from(v.trim());
            }
        }
        if let Some(v) = lookup("WISEPICK_USER_NAME") {
            let name = v.trim();
            if !name.is_empty() {
                cfg.user_name = name.to_string();
            }
        }

        Ok(cfg)
    }
}

fn parse<T: std::str::FromStr>(
    value: &str,
    var: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: value.to_string(),
    })
}
