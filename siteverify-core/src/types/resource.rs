use serde::{Deserialize, Serialize};

/// Record type of every verification proof record this controller manages.
pub const DNS_TXT_RECORD_TYPE: &str = "TXT";

/// A managed domain verification.
///
/// `id` is assigned by the authority on a successful create
/// (`dns://<domain>`, already percent-decoded). The controller holds no
/// copy of this between invocations; the orchestration layer stores it and
/// hands it back for read/delete/import.
///
/// `domain` and `token` are immutable for the resource's lifetime:
/// changing either means destroying and recreating the verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResource {
    /// Authority-assigned identifier, stable once assigned.
    pub id: String,
    /// The verified domain.
    pub domain: String,
    /// The token that was published to prove ownership.
    pub token: String,
}

/// The DNS record an operator must publish to prove ownership of a domain.
///
/// Computed fresh on every query and never persisted: the authority is the
/// only source of truth for token values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsTokenRecord {
    /// Always `"TXT"`.
    pub record_type: String,
    /// Name of the record to create (the domain itself).
    pub record_name: String,
    /// Value of the record (the authority-issued token).
    pub record_value: String,
}

impl DnsTokenRecord {
    /// Build the TXT record for `domain` carrying `token`.
    #[must_use]
    pub fn new(domain: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            record_type: DNS_TXT_RECORD_TYPE.to_string(),
            record_name: domain.into(),
            record_value: token.into(),
        }
    }
}
