mod dns_server_mock;

pub use dns_server_mock::{MockAnswer, MockBehavior, MockDnsServer, TYPE_A, TYPE_AAAA};
