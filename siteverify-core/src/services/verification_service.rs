//! Verification resource lifecycle service

use std::sync::Arc;

use siteverify_provider::WebResource;

use crate::error::{CoreError, CoreResult};
use crate::resource_id;
use crate::retry::{RetryError, retry_until_deadline};
use crate::services::VerifierContext;
use crate::types::VerificationResource;

/// Diagnostic text the authority returns while the proof token is still
/// published. There is no structured error code for this condition: the
/// API surfaces it only through this sentence, so delete retryability is
/// classified by matching it. Must stay byte-identical to what the
/// authority sends; match here and nowhere else.
pub const TOKEN_STILL_EXISTS: &str = "You cannot unverify your ownership of this site until your verification token (meta tag, HTML file, Google Analytics tracking code, Google Tag Manager container code, or DNS record) has been removed.";

/// The lifecycle controller for domain verifications.
///
/// Stateless between calls: the authority owns the resource, and the
/// orchestration layer owns the identifier string. Each operation is
/// self-contained given its inputs and the shared client handle, so
/// independent domains can be reconciled concurrently.
pub struct VerificationService {
    ctx: Arc<VerifierContext>,
}

impl VerificationService {
    /// 创建生命周期服务实例
    #[must_use]
    pub fn new(ctx: Arc<VerifierContext>) -> Self {
        Self { ctx }
    }

    /// Verify ownership of `domain`, which must already carry `token` in
    /// a DNS TXT record.
    ///
    /// Insert is retried until the create budget elapses: the authority
    /// rejecting the request is the normal state of the world while DNS
    /// propagation catches up, and no insert failure mode is documented
    /// as permanent. On success the returned identifier is strictly
    /// percent-decoded, then one read confirms the resource exists. Both
    /// of those failures are terminal, and a terminal failure hands no
    /// identifier back to the caller.
    pub async fn create(&self, domain: &str, token: &str) -> CoreResult<VerificationResource> {
        let inserted = retry_until_deadline(
            self.ctx.timeouts.create,
            "insert",
            |_| true,
            || self.ctx.verifier.insert(domain),
        )
        .await
        .map_err(|e| match e {
            RetryError::Expired {
                last_error,
                elapsed,
            } => CoreError::CreateTimeout {
                domain: domain.to_string(),
                elapsed_secs: elapsed.as_secs(),
                last_error: last_error.to_string(),
            },
            RetryError::Fatal(source) => CoreError::Provider(source),
        })?;

        let id = resource_id::decode(&inserted.id)?;

        self.read(&id).await?;

        log::info!("verified '{domain}' as '{id}'");
        Ok(VerificationResource {
            id,
            domain: domain.to_string(),
            token: token.to_string(),
        })
    }

    /// Check that the verification identified by `id` still exists.
    ///
    /// A failure is surfaced as-is: the client cannot tell "gone" from
    /// "unreachable", and this layer does not pretend otherwise. Callers
    /// treating an error as "resource no longer exists" inherit that
    /// ambiguity knowingly.
    pub async fn read(&self, id: &str) -> CoreResult<WebResource> {
        self.ctx
            .verifier
            .get(id)
            .await
            .map_err(|source| CoreError::ReadFailed {
                id: id.to_string(),
                source,
            })
    }

    /// Unverify the resource identified by `id`.
    ///
    /// Legacy identifiers (bare domain, stored by controller versions
    /// 0.3.1 and earlier) are normalized to the `dns://` form before the
    /// call. While the authority reports the proof token as still
    /// published ([`TOKEN_STILL_EXISTS`]) the delete is retried, since
    /// removal propagation races the attempt. Any other error aborts
    /// immediately.
    pub async fn delete(&self, id: &str) -> CoreResult<()> {
        let id = resource_id::normalize(id);

        retry_until_deadline(
            self.ctx.timeouts.delete,
            "delete",
            |e| e.to_string().contains(TOKEN_STILL_EXISTS),
            || self.ctx.verifier.delete(&id),
        )
        .await
        .map_err(|e| match e {
            RetryError::Expired {
                last_error,
                elapsed,
            } => CoreError::DeleteTimeout {
                id: id.clone(),
                elapsed_secs: elapsed.as_secs(),
                last_error: last_error.to_string(),
            },
            RetryError::Fatal(source) => CoreError::DeleteFailed {
                id: id.clone(),
                source,
            },
        })?;

        log::info!("deleted verification '{id}'");
        Ok(())
    }

    /// Reconstruct a full resource from an externally supplied identifier.
    ///
    /// This is the only path that derives the token from authority state
    /// instead of taking it as input: existence is checked with the raw
    /// id exactly as supplied, then the current token is fetched for the
    /// recovered domain. Either call failing is terminal.
    pub async fn import(&self, raw_id: &str) -> CoreResult<VerificationResource> {
        let domain = resource_id::domain_of(raw_id).to_string();

        self.read(raw_id).await?;

        let token = self
            .ctx
            .verifier
            .get_token(&domain)
            .await
            .map_err(|source| CoreError::TokenFetchFailed {
                domain: domain.clone(),
                source,
            })?;

        Ok(VerificationResource {
            id: raw_id.to_string(),
            domain,
            token,
        })
    }
}
