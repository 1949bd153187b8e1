//! Generic HTTP request plumbing
//!
//! One send/read/log path shared by every endpoint wrapper. The helpers
//! deliberately do not retry: the authority's interesting failures are
//! workflow races that the caller's deadline-driven loop must own.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and body text.
    ///
    /// Transport failures map to [`ProviderError::Timeout`] or
    /// [`ProviderError::NetworkError`]; any response that arrives is
    /// returned to the caller for endpoint-specific decoding, whatever
    /// its status code.
    pub(crate) async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("{method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        // Bodies can carry verification tokens; log only their size.
        log::debug!("Response Body: {} bytes", response_text.len());

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    pub(crate) fn parse_json<T>(response_text: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            ProviderError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}
