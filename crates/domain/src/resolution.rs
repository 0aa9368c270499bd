use crate::DomainError;
use serde::Serialize;

/// Outcome of resolving one hostname.
///
/// Failures are carried inside the value rather than returned as errors, so a
/// caller always receives a result. Address lists keep whatever was collected
/// before a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    hostname: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    ipv4: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    ipv6: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    cname: String,

    #[serde(rename = "error", skip_serializing_if = "is_false")]
    failed: bool,

    #[serde(rename = "errormessage", skip_serializing_if = "String::is_empty")]
    error_message: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ResolutionResult {
    /// A successful lookup that found nothing.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Default::default()
        }
    }

    /// The hostname is an alias. No address lists are ever attached.
    pub fn canonical(hostname: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            cname: target.into(),
            ..Self::new(hostname)
        }
    }

    pub fn resolved(hostname: impl Into<String>, ipv4: Vec<String>, ipv6: Vec<String>) -> Self {
        Self {
            ipv4,
            ipv6,
            ..Self::new(hostname)
        }
    }

    /// A failed lookup. `ipv4` carries whatever was collected before the
    /// error; the IPv6 query is always the last one, so it has none.
    pub fn failure(hostname: impl Into<String>, ipv4: Vec<String>, error: &DomainError) -> Self {
        Self {
            ipv4,
            failed: true,
            error_message: error.to_string(),
            ..Self::new(hostname)
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn ipv4(&self) -> &[String] {
        &self.ipv4
    }

    pub fn ipv6(&self) -> &[String] {
        &self.ipv6
    }

    pub fn cname(&self) -> &str {
        &self.cname
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn is_success(&self) -> bool {
        !self.failed
    }
}
