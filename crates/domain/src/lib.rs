//! Ferrous Resolve Domain Layer
pub mod config;
pub mod dns_name;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod nameserver;
pub mod resolution;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_name::to_fqdn;
pub use dns_query::DnsQuery;
pub use dns_record::{RecordType, ResourceRecord};
pub use errors::DomainError;
pub use nameserver::{NameserverAddr, DEFAULT_DNS_PORT};
pub use resolution::ResolutionResult;
