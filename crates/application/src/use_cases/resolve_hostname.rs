use crate::ports::DnsQueryFacility;
use ferrous_resolve_domain::{
    to_fqdn, DnsQuery, DomainError, NameserverAddr, RecordType, ResolutionResult, ResourceRecord,
    DEFAULT_DNS_PORT,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves a hostname to its CNAME target or its IPv4/IPv6 addresses.
///
/// The CNAME question is asked first. A canonical name ends the lookup; only
/// names without one are queried for A and then AAAA records.
pub struct ResolveHostnameUseCase {
    facility: Arc<dyn DnsQueryFacility>,
    port: u16,
}

impl ResolveHostnameUseCase {
    pub fn new(facility: Arc<dyn DnsQueryFacility>) -> Self {
        Self {
            facility,
            port: DEFAULT_DNS_PORT,
        }
    }

    /// Port used for nameservers given without one.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Never fails: errors end the lookup and are recorded in the result.
    pub async fn execute(&self, hostname: &str, nameserver: &str) -> ResolutionResult {
        match self.lookup_cname(hostname, nameserver).await {
            Ok(Some(target)) => {
                debug!(hostname = %hostname, cname = %target, "CNAME found, skipping address lookup");
                return ResolutionResult::canonical(hostname, target);
            }
            Ok(None) => {}
            Err(e) => return Self::fail(hostname, Vec::new(), &e),
        }

        let ipv4 = match self.lookup_addresses(hostname, nameserver, RecordType::A).await {
            Ok(addresses) => addresses,
            Err(e) => return Self::fail(hostname, Vec::new(), &e),
        };

        let ipv6 = match self
            .lookup_addresses(hostname, nameserver, RecordType::AAAA)
            .await
        {
            Ok(addresses) => addresses,
            Err(e) => return Self::fail(hostname, ipv4, &e),
        };

        debug!(
            hostname = %hostname,
            ipv4 = ipv4.len(),
            ipv6 = ipv6.len(),
            "Hostname resolved"
        );

        ResolutionResult::resolved(hostname, ipv4, ipv6)
    }

    /// Returns the first CNAME target for `hostname`, or `None` when the
    /// answer section holds no CNAME record.
    pub async fn lookup_cname(
        &self,
        hostname: &str,
        nameserver: &str,
    ) -> Result<Option<String>, DomainError> {
        let query = self.build_query(hostname, nameserver, RecordType::CNAME)?;
        let records = self.facility.query(&query).await?;
        first_cname_target(&records)
    }

    /// Returns the textual addresses of every `record_type` answer, in answer
    /// order. Only A and AAAA are accepted.
    pub async fn lookup_addresses(
        &self,
        hostname: &str,
        nameserver: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError> {
        let query = self.build_query(hostname, nameserver, record_type)?;
        if !record_type.is_address() {
            return Err(DomainError::UnsupportedRecordType(record_type));
        }

        let records = self.facility.query(&query).await?;
        extract_addresses(&records, record_type)
    }

    fn build_query(
        &self,
        hostname: &str,
        nameserver: &str,
        record_type: RecordType,
    ) -> Result<DnsQuery, DomainError> {
        if hostname.is_empty() {
            return Err(DomainError::empty_hostname());
        }
        if nameserver.is_empty() {
            return Err(DomainError::empty_nameserver());
        }

        let nameserver = NameserverAddr::parse(nameserver, self.port)?;

        debug!(
            hostname = %hostname,
            record_type = %record_type,
            nameserver = %nameserver,
            "Querying nameserver"
        );

        Ok(DnsQuery::new(to_fqdn(hostname), record_type, nameserver))
    }

    fn fail(hostname: &str, ipv4: Vec<String>, error: &DomainError) -> ResolutionResult {
        warn!(hostname = %hostname, error = %error, "Resolution failed");
        ResolutionResult::failure(hostname, ipv4, error)
    }
}

/// Picks the first CNAME in answer order. An empty target is malformed.
pub fn first_cname_target(records: &[ResourceRecord]) -> Result<Option<String>, DomainError> {
    let target = records.iter().find_map(|record| match record {
        ResourceRecord::Cname { target } => Some(target),
        _ => None,
    });

    match target {
        Some(target) if target.is_empty() => Err(DomainError::MalformedRecord(
            "empty CNAME target".to_string(),
        )),
        Some(target) => Ok(Some(target.clone())),
        None => Ok(None),
    }
}

/// Keeps the addresses of records matching `record_type`.
///
/// Other record types and records without an address payload are skipped.
pub fn extract_addresses(
    records: &[ResourceRecord],
    record_type: RecordType,
) -> Result<Vec<String>, DomainError> {
    let addresses = match record_type {
        RecordType::A => records
            .iter()
            .filter_map(|record| match record {
                ResourceRecord::A { address } => address.map(|ip| ip.to_string()),
                _ => None,
            })
            .collect(),
        RecordType::AAAA => records
            .iter()
            .filter_map(|record| match record {
                ResourceRecord::Aaaa { address } => address.map(|ip| ip.to_string()),
                _ => None,
            })
            .collect(),
        other => return Err(DomainError::UnsupportedRecordType(other)),
    };

    Ok(addresses)
}
