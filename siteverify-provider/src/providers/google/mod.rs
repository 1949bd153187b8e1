//! Google Site Verification authority client

mod error;
mod http;
mod provider;
mod types;

use std::sync::Arc;
use std::time::Duration;

use gcp_auth::TokenProvider;
use reqwest::Client;

pub(crate) use types::{
    ApiErrorEnvelope, InsertRequest, SiteBody, TokenRequest, TokenResponse, WebResourceResponse,
};

pub(crate) const API_BASE: &str = "https://www.googleapis.com/siteVerification/v1";
/// Site type for whole-domain (as opposed to single-URL) verification.
pub(crate) const SITE_TYPE_INET_DOMAIN: &str = "INET_DOMAIN";
/// Verification method backed by a DNS TXT record.
pub(crate) const METHOD_DNS_TXT: &str = "DNS_TXT";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Google Site Verification client
pub struct GoogleSiteVerification {
    pub(crate) client: Client,
    pub(crate) token_source: Arc<dyn TokenProvider>,
}

impl GoogleSiteVerification {
    /// Build a client around an already-resolved token source.
    ///
    /// Most callers should go through
    /// [`create_verifier`](crate::create_verifier) instead.
    pub fn new(token_source: Arc<dyn TokenProvider>) -> Self {
        Self {
            client: create_http_client(),
            token_source,
        }
    }
}

/// 创建带超时配置的 HTTP Client
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}
