pub mod resolve_hostname;

pub use resolve_hostname::{extract_addresses, first_cname_target, ResolveHostnameUseCase};
