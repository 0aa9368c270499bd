pub mod forwarding;
pub mod query_facility;
pub mod transport;

pub use forwarding::{DnsResponse, MessageBuilder, RecordTypeMapper, ResponseParser, ResponseQuestion};
pub use query_facility::{HickoryQueryFacility, QueryFacilityConfig};
pub use transport::{DnsTransport, Transport, TransportResponse};
