//! Verifier factory function.

use std::sync::Arc;

use crate::credentials::Credentials;
use crate::error::Result;
use crate::providers::GoogleSiteVerification;
use crate::traits::SiteVerifier;

/// Creates a [`SiteVerifier`] from optional inline credentials.
///
/// `inline_credentials` is either the JSON contents of a service account
/// key, a path to one, or empty/`None` to use application default
/// credentials; see [`Credentials::resolve`] for the decision order.
///
/// The returned verifier is wrapped in `Arc<dyn SiteVerifier>`: it is a
/// stateless stub, safe to share across concurrent reconciliations for
/// the process lifetime (token refresh is handled inside the source).
///
/// # Examples
///
/// ```rust,no_run
/// use siteverify_provider::create_verifier;
///
/// # async fn example() -> siteverify_provider::Result<()> {
/// let verifier = create_verifier(Some("/etc/siteverify/key.json")).await?;
/// let token = verifier.get_token("example.com").await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_verifier(inline_credentials: Option<&str>) -> Result<Arc<dyn SiteVerifier>> {
    let credentials = Credentials::resolve(inline_credentials)?;
    let token_source = credentials.into_token_source().await?;
    Ok(Arc::new(GoogleSiteVerification::new(token_source)))
}
