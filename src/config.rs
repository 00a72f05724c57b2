// Server configuration from environment variables

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::navigation::ScrollSpyConfig;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_VIEW_TTL_SECS: u64 = 30 * 60;
pub const DEFAULT_VIEW_CAPACITY: u64 = 10_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid {expected}")]
    Malformed {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("{var} must be {requirement}, got {value}")]
    OutOfRange {
        var: &'static str,
        value: String,
        requirement: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Portfolio JSON on disk; `None` serves the embedded content
    pub portfolio_path: Option<PathBuf>,
    pub assets_dir: PathBuf,
    pub scroll: ScrollSpyConfig,
    pub view_ttl: Duration,
    pub view_capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            portfolio_path: None,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            scroll: ScrollSpyConfig::default(),
            view_ttl: Duration::from_secs(DEFAULT_VIEW_TTL_SECS),
            view_capacity: DEFAULT_VIEW_CAPACITY,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. Unset or blank variables keep their
    /// default; anything else must parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let host = parse_or(get("HOST"), "HOST", "IP address", defaults.host)?;
        let port = parse_or(get("PORT"), "PORT", "port number", defaults.port)?;
        let portfolio_path = get("PORTFOLIO_DATA").map(PathBuf::from);
        let assets_dir = get("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        let activation_offset = parse_or(
            get("SCROLL_ACTIVATION_OFFSET"),
            "SCROLL_ACTIVATION_OFFSET",
            "number",
            defaults.scroll.activation_offset,
        )?;
        let scrolled_threshold = parse_or(
            get("SCROLL_THRESHOLD"),
            "SCROLL_THRESHOLD",
            "number",
            defaults.scroll.scrolled_threshold,
        )?;
        for (var, value) in [
            ("SCROLL_ACTIVATION_OFFSET", activation_offset),
            ("SCROLL_THRESHOLD", scrolled_threshold),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::OutOfRange {
                    var,
                    value: value.to_string(),
                    requirement: "a finite number",
                });
            }
        }

        let ttl_secs = parse_or(
            get("VIEW_TTL_SECS"),
            "VIEW_TTL_SECS",
            "number of seconds",
            DEFAULT_VIEW_TTL_SECS,
        )?;
        let view_capacity = parse_or(
            get("VIEW_CAPACITY"),
            "VIEW_CAPACITY",
            "count",
            defaults.view_capacity,
        )?;
        if ttl_secs == 0 {
            return Err(ConfigError::OutOfRange {
                var: "VIEW_TTL_SECS",
                value: ttl_secs.to_string(),
                requirement: "at least 1",
            });
        }
        if view_capacity == 0 {
            return Err(ConfigError::OutOfRange {
                var: "VIEW_CAPACITY",
                value: view_capacity.to_string(),
                requirement: "at least 1",
            });
        }

        Ok(Self {
            host,
            port,
            portfolio_path,
            assets_dir,
            scroll: ScrollSpyConfig {
                activation_offset,
                scrolled_threshold,
            },
            view_ttl: Duration::from_secs(ttl_secs),
            view_capacity,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    raw: Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Malformed {
            var,
            value,
            expected,
        }),
    }
}
