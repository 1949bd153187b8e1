//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use siteverify_provider::ProviderError;

/// Core layer error type
///
/// Client errors always keep the authority's original diagnostic text:
/// retry classification matches on it, and operators debug with it.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The token RPC failed; no DNS record can be computed.
    #[error("failed to fetch verification token for '{domain}': {source}")]
    TokenFetchFailed {
        domain: String,
        source: ProviderError,
    },

    /// The create budget elapsed before the authority accepted the
    /// verification. Carries the last insert error for diagnosis.
    #[error("verification of '{domain}' did not complete within {elapsed_secs}s: {last_error}")]
    CreateTimeout {
        domain: String,
        elapsed_secs: u64,
        last_error: String,
    },

    /// The authority returned an identifier that is not valid
    /// percent-encoding. Terminal: retrying would return the same bytes.
    #[error("failed to decode resource id '{raw}': {detail}")]
    IdDecodeFailed { raw: String, detail: String },

    /// The existence check failed. Deliberately not split into
    /// "not found" vs "transient": the client's error shape does not
    /// distinguish them, and inventing the distinction here would lie to
    /// callers.
    #[error("failed to read verification resource '{id}': {source}")]
    ReadFailed { id: String, source: ProviderError },

    /// The delete budget elapsed while the authority still reported the
    /// proof token as published.
    #[error("proof token for '{id}' still published after {elapsed_secs}s: {last_error}")]
    DeleteTimeout {
        id: String,
        elapsed_secs: u64,
        last_error: String,
    },

    /// Delete failed for a reason other than the outstanding-token race.
    #[error("failed to delete verification resource '{id}': {source}")]
    DeleteFailed { id: String, source: ProviderError },

    /// Client error (converted from the library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist,
    /// propagation races, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            // A failed read usually means the resource is gone, which is a
            // normal refresh outcome.
            Self::ReadFailed { .. } => true,
            Self::TokenFetchFailed { source, .. } | Self::DeleteFailed { source, .. } => {
                source.is_expected()
            }
            Self::Provider(e) => e.is_expected(),
            Self::CreateTimeout { .. } | Self::DeleteTimeout { .. } | Self::IdDecodeFailed { .. } => {
                false
            }
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
