//! Static schema metadata for the orchestration layer.
//!
//! The managed resource and the token data source are described as plain
//! data (input/output fields plus the operations the controller
//! implements) instead of being registered in process-global tables. An
//! orchestration layer pairs a manifest with the matching service
//! ([`VerificationService`](crate::services::VerificationService) for
//! [`dns_resource`], [`TokenService`](crate::services::TokenService) for
//! [`dns_token_data_source`]) and owns dispatch itself.

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_CREATE_TIMEOUT_SECS, DEFAULT_DELETE_TIMEOUT_SECS};

pub const DOMAIN_KEY: &str = "domain";
pub const TOKEN_KEY: &str = "token";
pub const RECORD_TYPE_KEY: &str = "record_type";
pub const RECORD_NAME_KEY: &str = "record_name";
pub const RECORD_VALUE_KEY: &str = "record_value";
pub const CREDENTIALS_KEY: &str = "credentials";

/// Lifecycle operations a manifest's service implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Read,
    Delete,
    Import,
}

/// Definition of a single input/output field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Machine-readable field key (e.g., `"domain"`).
    pub key: String,
    /// Help/description text.
    pub description: String,
    /// Whether the field must be supplied.
    pub required: bool,
    /// Changing this input forces destroy + recreate.
    pub force_new: bool,
    /// Output computed by the controller rather than supplied.
    pub computed: bool,
    /// Should be masked in logs and UIs.
    pub sensitive: bool,
}

impl FieldSpec {
    fn input(key: &str, description: &str, force_new: bool) -> Self {
        Self {
            key: key.to_string(),
            description: description.to_string(),
            required: true,
            force_new,
            computed: false,
            sensitive: false,
        }
    }

    fn computed(key: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            description: description.to_string(),
            required: false,
            force_new: false,
            computed: true,
            sensitive: false,
        }
    }

    fn optional_sensitive(key: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            description: description.to_string(),
            required: false,
            force_new: false,
            computed: false,
            sensitive: true,
        }
    }
}

/// Static description of one managed resource or data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceManifest {
    /// Resource type name (e.g., `"siteverify_dns"`).
    pub type_name: String,
    /// Short description of what the resource manages.
    pub description: String,
    /// Input and output fields.
    pub fields: Vec<FieldSpec>,
    /// Operations the matching service implements.
    pub operations: Vec<Operation>,
    /// Default create retry budget, when the resource has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_timeout_secs: Option<u64>,
    /// Default delete retry budget, when the resource has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_timeout_secs: Option<u64>,
}

/// Manifest for the managed domain verification resource.
#[must_use]
pub fn dns_resource() -> ResourceManifest {
    ResourceManifest {
        type_name: "siteverify_dns".to_string(),
        description: "Verifies ownership of a domain via a published DNS TXT record."
            .to_string(),
        fields: vec![
            FieldSpec::input(DOMAIN_KEY, "The domain you want to verify.", true),
            FieldSpec::input(
                TOKEN_KEY,
                "The token from the siteverify_dns_token data source. \
                 A changed token forces a new verification.",
                true,
            ),
            FieldSpec::computed("id", "Authority-assigned resource identifier."),
        ],
        operations: vec![
            Operation::Create,
            Operation::Read,
            Operation::Delete,
            Operation::Import,
        ],
        create_timeout_secs: Some(DEFAULT_CREATE_TIMEOUT_SECS),
        delete_timeout_secs: Some(DEFAULT_DELETE_TIMEOUT_SECS),
    }
}

/// Manifest for the read-only token data source.
#[must_use]
pub fn dns_token_data_source() -> ResourceManifest {
    ResourceManifest {
        type_name: "siteverify_dns_token".to_string(),
        description: "The DNS record to publish before verifying a domain.".to_string(),
        fields: vec![
            FieldSpec::input(DOMAIN_KEY, "The domain you want to verify.", false),
            FieldSpec::computed(RECORD_TYPE_KEY, "The type of DNS record to create."),
            FieldSpec::computed(RECORD_NAME_KEY, "The name of the record to create."),
            FieldSpec::computed(RECORD_VALUE_KEY, "The value of the record to create."),
        ],
        operations: vec![Operation::Read],
        create_timeout_secs: None,
        delete_timeout_secs: None,
    }
}

/// Provider-level configuration fields.
#[must_use]
pub fn provider_fields() -> Vec<FieldSpec> {
    vec![FieldSpec::optional_sensitive(
        CREDENTIALS_KEY,
        "Either the path to or the contents of a service account key file in \
         JSON format. If not provided, application default credentials are used.",
    )]
}
