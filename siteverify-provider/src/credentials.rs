//! Credential resolution for the verification authority.
//!
//! Mirrors the credential behavior of the official Google provider
//! ecosystem: an optional configuration string is either the JSON contents
//! of a service account key or a path to one, and when it is absent the
//! application-default-credentials chain takes over.

use std::path::PathBuf;
use std::sync::Arc;

use gcp_auth::{CustomServiceAccount, TokenProvider};

use crate::error::{ProviderError, Result};

/// The single OAuth2 scope every token is requested under.
pub const SITE_VERIFICATION_SCOPE: &str = "https://www.googleapis.com/auth/siteverification";

/// Resolved credential source for the authority client.
///
/// Produced by [`Credentials::resolve`]; consumed by
/// [`create_verifier`](crate::create_verifier), which turns it into a
/// scoped token source. The resolver itself caches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Inline service account key material (a JSON document).
    Json(String),
    /// Path to a service account key file.
    File(PathBuf),
    /// Application default credential discovery.
    ApplicationDefault,
}

impl Credentials {
    /// Classify an optional inline credential string.
    ///
    /// Decision order, first match wins:
    ///
    /// 1. Non-empty and syntactically valid JSON → inline key material.
    /// 2. Non-empty → filesystem path; the file must exist.
    /// 3. Empty or absent → application default credentials.
    ///
    /// Step 2 fails with [`ProviderError::CredentialsNotFound`] without
    /// falling through to ambient discovery: a configured-but-wrong path
    /// is an operator mistake, not a request for the default chain.
    pub fn resolve(inline: Option<&str>) -> Result<Self> {
        match inline {
            Some(raw) if !raw.is_empty() => {
                if serde_json::from_str::<serde::de::IgnoredAny>(raw).is_ok() {
                    Ok(Self::Json(raw.to_string()))
                } else if PathBuf::from(raw).exists() {
                    Ok(Self::File(PathBuf::from(raw)))
                } else {
                    Err(ProviderError::CredentialsNotFound {
                        path: raw.to_string(),
                    })
                }
            }
            _ => Ok(Self::ApplicationDefault),
        }
    }

    /// Build the token source this credential resolves to.
    pub(crate) async fn into_token_source(self) -> Result<Arc<dyn TokenProvider>> {
        match self {
            Self::Json(json) => {
                let account = CustomServiceAccount::from_json(&json).map_err(|e| {
                    ProviderError::InvalidCredentials {
                        detail: e.to_string(),
                    }
                })?;
                Ok(Arc::new(account))
            }
            Self::File(path) => {
                let account = CustomServiceAccount::from_file(&path).map_err(|e| {
                    ProviderError::InvalidCredentials {
                        detail: e.to_string(),
                    }
                })?;
                Ok(Arc::new(account))
            }
            Self::ApplicationDefault => gcp_auth::provider().await.map_err(|e| {
                ProviderError::NoDefaultCredentials {
                    detail: e.to_string(),
                }
            }),
        }
    }
}
