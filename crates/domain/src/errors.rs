use crate::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required input was blank. Carries the field name.
    #[error("empty {0}")]
    EmptyInput(&'static str),

    #[error("{0}")]
    MalformedRecord(String),

    #[error("{0}")]
    TransportFailure(String),

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid nameserver: {0}")]
    InvalidNameserver(String),

    #[error("unknown record type: {0}")]
    UnsupportedRecordType(RecordType),
}

impl DomainError {
    pub fn empty_hostname() -> Self {
        Self::EmptyInput("hostname")
    }

    pub fn empty_nameserver() -> Self {
        Self::EmptyInput("nameserver")
    }
}
