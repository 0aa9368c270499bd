use super::record_type_map::RecordTypeMapper;
use ferrous_resolve_domain::{DomainError, RecordType, ResourceRecord};
use hickory_proto::op::{Message, Query, ResponseCode};
use hickory_proto::rr::{RData, Record, RecordType as HickoryRecordType};
use tracing::debug;

/// One entry of the question section as echoed by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseQuestion {
    pub name: String,
    /// `None` for types outside the domain model.
    pub record_type: Option<RecordType>,
}

impl ResponseQuestion {
    /// Case-insensitive name comparison; the trailing dot is optional.
    pub fn matches(&self, name: &str, record_type: RecordType) -> bool {
        self.record_type == Some(record_type)
            && self
                .name
                .trim_end_matches('.')
                .eq_ignore_ascii_case(name.trim_end_matches('.'))
    }
}

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub questions: Vec<ResponseQuestion>,

    /// Answer section, in wire order.
    pub records: Vec<ResourceRecord>,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let questions = message.queries().iter().map(Self::map_question).collect();
        let records: Vec<ResourceRecord> = message.answers().iter().map(Self::map_record).collect();

        let response = DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            questions,
            records,
        };

        debug!(
            id = response.id,
            rcode = ?response.rcode,
            answers = response.records.len(),
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }

    pub fn map_question(query: &Query) -> ResponseQuestion {
        ResponseQuestion {
            name: query.name().to_utf8(),
            record_type: RecordTypeMapper::from_hickory(query.query_type()),
        }
    }

    /// Maps one answer record. Zero-length A/AAAA payloads keep their type
    /// with no address.
    pub fn map_record(record: &Record) -> ResourceRecord {
        match record.data() {
            RData::A(a) => ResourceRecord::A { address: Some(a.0) },
            RData::AAAA(aaaa) => ResourceRecord::Aaaa {
                address: Some(aaaa.0),
            },
            RData::CNAME(canonical) => ResourceRecord::Cname {
                target: canonical.to_utf8(),
            },
            RData::Update0(HickoryRecordType::A) => ResourceRecord::A { address: None },
            RData::Update0(HickoryRecordType::AAAA) => ResourceRecord::Aaaa { address: None },
            _ => ResourceRecord::Other {
                record_type: u16::from(record.record_type()),
            },
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
