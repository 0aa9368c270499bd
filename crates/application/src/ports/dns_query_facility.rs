use async_trait::async_trait;
use ferrous_resolve_domain::{DnsQuery, DomainError, ResourceRecord};

/// Sends one recursive question to a nameserver and returns the answer section.
///
/// Implementations must be safe to call from concurrent resolutions and must
/// apply their own per-query timeout.
#[async_trait]
pub trait DnsQueryFacility: Send + Sync {
    async fn query(&self, query: &DnsQuery) -> Result<Vec<ResourceRecord>, DomainError>;
}
