//! Process configuration read from the environment

use crate::state_machine::SessionLimits;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_RANDOM_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: IpAddr,
    pub port: u16,
    pub max_random_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_random_size: DEFAULT_MAX_RANDOM_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or unparsable values keep
    /// their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind: read(&lookup, "ARRAYBOT_BIND").unwrap_or(defaults.bind),
            port: read(&lookup, "ARRAYBOT_PORT").unwrap_or(defaults.port),
            max_random_size: read(&lookup, "ARRAYBOT_MAX_RANDOM_SIZE")
                .filter(|&size: &usize| size > 0)
                .unwrap_or(defaults.max_random_size),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn session_limits(&self) -> SessionLimits {
        SessionLimits {
            max_random_size: self.max_random_size,
        }
    }
}

fn read<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!(key, value = %raw, "Ignoring unparsable configuration value");
    }
    parsed
}
