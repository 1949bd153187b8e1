//! Google Site Verification error mapping

use crate::error::ProviderError;
use crate::traits::{ApiErrorMapper, RawApiError};

use super::GoogleSiteVerification;

/// Error mapping for the Site Verification API.
/// Reference: <https://developers.google.com/site-verification/v1/errors>
///
/// Only authentication failures get their own variant. Everything else
/// stays [`ProviderError::Api`] with the authority's message untouched:
/// the API has no structured code for the conditions callers care about
/// (token not yet visible, token still published), so the message text is
/// the contract and must survive the mapping byte for byte.
impl ApiErrorMapper for GoogleSiteVerification {
    fn map_error(&self, raw: RawApiError) -> ProviderError {
        match (raw.status, raw.reason.as_deref()) {
            // 401, or 403 with an auth reason: the bearer token is bad or
            // lacks the siteverification scope.
            (401, _) | (403, Some("authError" | "forbidden" | "insufficientPermissions")) => {
                ProviderError::InvalidCredentials {
                    detail: raw.message,
                }
            }

            _ => ProviderError::Api {
                status: raw.status,
                message: raw.message,
            },
        }
    }
}
