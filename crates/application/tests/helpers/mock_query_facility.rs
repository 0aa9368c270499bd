#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_resolve_application::ports::DnsQueryFacility;
use ferrous_resolve_domain::{DnsQuery, DomainError, RecordType, ResourceRecord};
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Mutex;

type Scripted = Result<Vec<ResourceRecord>, DomainError>;

/// Query facility that answers from a script keyed by (fqdn, record type).
/// Unscripted questions get an empty answer section.
#[derive(Default)]
pub struct MockQueryFacility {
    responses: Mutex<HashMap<(String, RecordType), Scripted>>,
    calls: Mutex<Vec<DnsQuery>>,
}

impl MockQueryFacility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_records(&self, fqdn: &str, record_type: RecordType, records: Vec<ResourceRecord>) {
        self.responses
            .lock()
            .unwrap()
            .insert((fqdn.to_string(), record_type), Ok(records));
    }

    pub fn set_error(&self, fqdn: &str, record_type: RecordType, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert((fqdn.to_string(), record_type), Err(error));
    }

    pub fn set_ipv4(&self, fqdn: &str, addresses: &[&str]) {
        let records = addresses
            .iter()
            .map(|ip| ResourceRecord::a(ip.parse::<Ipv4Addr>().unwrap()))
            .collect();
        self.set_records(fqdn, RecordType::A, records);
    }

    pub fn set_ipv6(&self, fqdn: &str, addresses: &[&str]) {
        let records = addresses
            .iter()
            .map(|ip| ResourceRecord::aaaa(ip.parse::<Ipv6Addr>().unwrap()))
            .collect();
        self.set_records(fqdn, RecordType::AAAA, records);
    }

    pub fn set_cname(&self, fqdn: &str, target: &str) {
        self.set_records(fqdn, RecordType::CNAME, vec![ResourceRecord::cname(target)]);
    }

    pub fn calls(&self) -> Vec<DnsQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn queried_types(&self) -> Vec<RecordType> {
        self.calls().iter().map(|q| q.record_type).collect()
    }
}

#[async_trait]
impl DnsQueryFacility for MockQueryFacility {
    async fn query(&self, query: &DnsQuery) -> Result<Vec<ResourceRecord>, DomainError> {
        self.calls.lock().unwrap().push(query.clone());

        self.responses
            .lock()
            .unwrap()
            .get(&(query.name.to_string(), query.record_type))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
