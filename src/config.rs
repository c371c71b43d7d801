//! Server configuration from environment variables
//!
//! - `BIND_ADDR` (default `0.0.0.0`)
//! - `PORT` (default `3000`)
//! - `DEFAULT_LANG` (default `pt`)
//!
//! Invalid values are logged and replaced by the default.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::i18n::Language;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub default_language: Language,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            default_language: Language::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a closure over a map)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = parse_or_default(&lookup, "BIND_ADDR", defaults.bind_addr);
        let port = parse_or_default(&lookup, "PORT", defaults.port);
        let default_language = parse_or_default(&lookup, "DEFAULT_LANG", defaults.default_language);

        Self {
            bind_addr,
            port,
            default_language,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
                default
            }
        },
        None => default,
    }
}
