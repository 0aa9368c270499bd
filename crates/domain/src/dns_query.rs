use super::{NameserverAddr, RecordType};
use std::sync::Arc;

/// A single question sent to one nameserver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    /// Fully-qualified name (dot-terminated).
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub nameserver: NameserverAddr,
}

impl DnsQuery {
    pub fn new(
        name: impl Into<Arc<str>>,
        record_type: RecordType,
        nameserver: NameserverAddr,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            nameserver,
        }
    }
}
