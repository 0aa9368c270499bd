use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// One answer record as handed back by the query facility.
///
/// Address payloads are optional because a record may arrive with empty
/// RDATA; consumers skip those instead of inventing a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRecord {
    Cname { target: String },
    A { address: Option<Ipv4Addr> },
    Aaaa { address: Option<Ipv6Addr> },
    /// Any record type the resolver does not interpret, by wire code.
    Other { record_type: u16 },
}

impl ResourceRecord {
    pub fn cname(target: impl Into<String>) -> Self {
        Self::Cname {
            target: target.into(),
        }
    }

    pub fn a(address: Ipv4Addr) -> Self {
        Self::A {
            address: Some(address),
        }
    }

    pub fn aaaa(address: Ipv6Addr) -> Self {
        Self::Aaaa {
            address: Some(address),
        }
    }

    pub fn wire_type(&self) -> u16 {
        match self {
            Self::Cname { .. } => RecordType::CNAME.to_u16(),
            Self::A { .. } => RecordType::A.to_u16(),
            Self::Aaaa { .. } => RecordType::AAAA.to_u16(),
            Self::Other { record_type } => *record_type,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.wire_type())
    }
}
