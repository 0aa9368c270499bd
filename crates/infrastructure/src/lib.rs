//! Ferrous Resolve Infrastructure Layer
pub mod dns;
