use crate::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Address of the nameserver a query is sent to.
///
/// IP literals are kept resolved; anything else is a hostname that the
/// transport layer resolves right before sending.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameserverAddr {
    Resolved(SocketAddr),
    Unresolved { hostname: Arc<str>, port: u16 },
}

impl NameserverAddr {
    /// Parses `1.1.1.1`, `2606:4700::1111`, `9.9.9.9:5353`, `[::1]:5353` or
    /// `dns.example.net`. Bare hosts get `default_port`.
    pub fn parse(input: &str, default_port: u16) -> Result<Self, DomainError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DomainError::empty_nameserver());
        }

        if let Ok(ip) = input.parse::<IpAddr>() {
            return Ok(Self::Resolved(SocketAddr::new(ip, default_port)));
        }

        if let Ok(addr) = input.parse::<SocketAddr>() {
            return Ok(Self::Resolved(addr));
        }

        let (host, port) = match input.rsplit_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|_| {
                    DomainError::InvalidNameserver(format!("invalid port in '{}'", input))
                })?;
                (host, port)
            }
            None => (input, default_port),
        };

        if host.is_empty() || host.contains(':') || host.contains(char::is_whitespace) {
            return Err(DomainError::InvalidNameserver(input.to_string()));
        }

        Ok(Self::Unresolved {
            hostname: Arc::from(host.trim_end_matches('.')),
            port,
        })
    }

    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            NameserverAddr::Resolved(addr) => Some(*addr),
            NameserverAddr::Unresolved { .. } => None,
        }
    }

    pub fn port(&self) -> u16 {
        match self {
            NameserverAddr::Resolved(addr) => addr.port(),
            NameserverAddr::Unresolved { port, .. } => *port,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, NameserverAddr::Unresolved { .. })
    }
}

impl fmt::Display for NameserverAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameserverAddr::Resolved(addr) => write!(f, "{}", addr),
            NameserverAddr::Unresolved { hostname, port } => write!(f, "{}:{}", hostname, port),
        }
    }
}
