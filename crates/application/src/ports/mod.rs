mod dns_query_facility;

pub use dns_query_facility::DnsQueryFacility;

// Re-export for convenience
pub use ferrous_resolve_domain::{DnsQuery, ResourceRecord};
