//! Verification token query service

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::VerifierContext;
use crate::types::DnsTokenRecord;

/// Read-only query mapping a domain to the DNS TXT record an operator
/// must publish before verification can succeed.
pub struct TokenService {
    ctx: Arc<VerifierContext>,
}

impl TokenService {
    /// 创建 token 查询服务实例
    #[must_use]
    pub fn new(ctx: Arc<VerifierContext>) -> Self {
        Self { ctx }
    }

    /// Fetch the token for `domain` and shape it as a publishable record.
    ///
    /// Idempotent and side-effect free: safe to call repeatedly and
    /// concurrently, and the record is computed fresh every time. A
    /// client failure surfaces immediately without retry; the
    /// orchestration layer decides whether to re-plan.
    pub async fn dns_token(&self, domain: &str) -> CoreResult<DnsTokenRecord> {
        let token = self
            .ctx
            .verifier
            .get_token(domain)
            .await
            .map_err(|source| CoreError::TokenFetchFailed {
                domain: domain.to_string(),
                source,
            })?;

        Ok(DnsTokenRecord::new(domain, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockCall, MockVerifier};
    use crate::types::VerificationTimeouts;
    use siteverify_provider::ProviderError;

    fn service(mock: Arc<MockVerifier>) -> TokenService {
        TokenService::new(Arc::new(VerifierContext::new(
            mock,
            VerificationTimeouts::default(),
        )))
    }

    #[tokio::test]
    async fn returns_txt_record_for_domain() {
        let mock = Arc::new(MockVerifier::new());
        mock.script_token(Ok("google-site-verification=abc123".to_string()))
            .await;

        let record = service(Arc::clone(&mock))
            .dns_token("example.com")
            .await
            .unwrap();

        assert_eq!(record.record_type, "TXT");
        assert_eq!(record.record_name, "example.com");
        assert_eq!(record.record_value, "google-site-verification=abc123");
    }

    #[tokio::test]
    async fn failure_maps_to_token_fetch_failed_without_retry() {
        let mock = Arc::new(MockVerifier::new());
        mock.script_token(Err(ProviderError::Api {
            status: 503,
            message: "Backend Error".to_string(),
        }))
        .await;

        let err = service(Arc::clone(&mock))
            .dns_token("example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::TokenFetchFailed { ref domain, .. } if domain == "example.com"));
        // Original diagnostic text survives.
        assert!(err.to_string().contains("Backend Error"));
        // Exactly one RPC: the query never retries.
        assert_eq!(
            mock.calls().await,
            vec![MockCall::GetToken("example.com".to_string())]
        );
    }
}
