use crate::nameserver::DEFAULT_DNS_PORT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Nameserver used when none is given on the command line.
    #[serde(default = "default_nameserver")]
    pub nameserver: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-query timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retry over TCP when a UDP answer comes back truncated.
    #[serde(default = "default_tcp_fallback")]
    pub tcp_fallback: bool,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameserver: default_nameserver(),
            port: default_port(),
            timeout_ms: default_timeout_ms(),
            tcp_fallback: default_tcp_fallback(),
        }
    }
}

fn default_nameserver() -> String {
    "1.1.1.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_DNS_PORT
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_tcp_fallback() -> bool {
    true
}
