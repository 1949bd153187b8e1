use serde::{Deserialize, Serialize};

/// Snapshot of a verification web resource held by the authority.
///
/// Returned by [`SiteVerifier::insert`](crate::SiteVerifier::insert) and
/// [`SiteVerifier::get`](crate::SiteVerifier::get). Lifecycle state lives
/// entirely on the authority's side; this is a point-in-time view, not a
/// handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebResource {
    /// Authority-assigned identifier, e.g. `dns://example.com`.
    ///
    /// The authority may return this percent-encoded (internationalized
    /// domains); the value is passed through exactly as received.
    pub id: String,
    /// The site this resource verifies, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<VerifiedSite>,
}

/// The site portion of a [`WebResource`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedSite {
    /// Domain the verification applies to.
    pub identifier: String,
    /// Authority-side site type, e.g. `INET_DOMAIN`.
    pub site_type: String,
}
