use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use ferrous_resolve_application::ports::DnsQueryFacility;
use ferrous_resolve_domain::{DnsQuery, DomainError, NameserverAddr, ResolverConfig, ResourceRecord};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct QueryFacilityConfig {
    /// Applied to each network step of a query.
    pub timeout: Duration,
    pub tcp_fallback: bool,
}

impl Default for QueryFacilityConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            tcp_fallback: true,
        }
    }
}

impl From<&ResolverConfig> for QueryFacilityConfig {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            timeout: config.timeout(),
            tcp_fallback: config.tcp_fallback,
        }
    }
}

/// Query facility speaking DNS over UDP, with TCP retry for truncated answers.
///
/// Holds no connection state; every query opens its own socket.
pub struct HickoryQueryFacility {
    config: QueryFacilityConfig,
}

impl HickoryQueryFacility {
    pub fn new(config: QueryFacilityConfig) -> Self {
        Self { config }
    }

    async fn resolve_server(&self, nameserver: &NameserverAddr) -> Result<SocketAddr, DomainError> {
        match nameserver {
            NameserverAddr::Resolved(addr) => Ok(*addr),
            NameserverAddr::Unresolved { hostname, port } => {
                let lookup = tokio::net::lookup_host((&**hostname, *port));
                let mut addrs = tokio::time::timeout(self.config.timeout, lookup)
                    .await
                    .map_err(|_| {
                        DomainError::InvalidNameserver(format!(
                            "Timeout resolving nameserver {}",
                            nameserver
                        ))
                    })?
                    .map_err(|e| {
                        DomainError::InvalidNameserver(format!(
                            "Failed to resolve nameserver {}: {}",
                            nameserver, e
                        ))
                    })?;

                let addr = addrs.next().ok_or_else(|| {
                    DomainError::InvalidNameserver(format!(
                        "No addresses found for nameserver {}",
                        nameserver
                    ))
                })?;

                debug!(nameserver = %nameserver, resolved = %addr, "Nameserver resolved");
                Ok(addr)
            }
        }
    }

    /// Sends the query and accepts the reply only if it echoes the query's ID
    /// and its single question.
    async fn exchange(
        &self,
        transport: &Transport,
        query: &DnsQuery,
        id: u16,
        request_bytes: &[u8],
    ) -> Result<DnsResponse, DomainError> {
        let reply = transport.send(request_bytes, self.config.timeout).await?;
        let response = ResponseParser::parse(&reply.bytes)?;

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {} ({})",
                response.id, id, reply.protocol_used
            )));
        }

        let question_matches = matches!(
            response.questions.as_slice(),
            [question] if question.matches(&query.name, query.record_type)
        );
        if !question_matches {
            let echoed: Vec<&str> = response.questions.iter().map(|q| q.name.as_str()).collect();
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response question {:?} does not match query {} {} ({})",
                echoed, query.name, query.record_type, reply.protocol_used
            )));
        }

        Ok(response)
    }
}

impl Default for HickoryQueryFacility {
    fn default() -> Self {
        Self::new(QueryFacilityConfig::default())
    }
}

#[async_trait]
impl DnsQueryFacility for HickoryQueryFacility {
    async fn query(&self, query: &DnsQuery) -> Result<Vec<ResourceRecord>, DomainError> {
        let server = self.resolve_server(&query.nameserver).await?;
        let (id, request_bytes) = MessageBuilder::build_query_with_id(&query.name, &query.record_type)?;

        let mut response = self
            .exchange(&Transport::udp(server), query, id, &request_bytes)
            .await?;

        if response.truncated {
            if self.config.tcp_fallback {
                debug!(server = %server, name = %query.name, "Truncated UDP response, retrying over TCP");
                response = self
                    .exchange(&Transport::tcp(server), query, id, &request_bytes)
                    .await?;
            } else {
                warn!(server = %server, name = %query.name, "Truncated UDP response, TCP fallback disabled");
            }
        }

        debug!(
            server = %server,
            name = %query.name,
            record_type = %query.record_type,
            status = ResponseParser::rcode_to_status(response.rcode),
            answers = response.records.len(),
            "Query answered"
        );

        Ok(response.records)
    }
}
