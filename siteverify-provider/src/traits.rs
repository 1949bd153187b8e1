use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::WebResource;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: u16,
    /// 错误 reason（Google 错误信封中的首个 reason，可能缺失）
    pub reason: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            reason: None,
            message: message.into(),
        }
    }

    pub fn with_reason(status: u16, reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            reason: Some(reason.into()),
            message: message.into(),
        }
    }
}

/// 错误映射 Trait（内部使用）
/// 将原始 API 错误映射到统一错误类型，消息文本必须原样保留。
pub(crate) trait ApiErrorMapper {
    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError) -> ProviderError;
}

/// Verification authority client.
///
/// Four remote operations, each a single network round trip. The trait
/// performs **no internal retry**: transient failures (most importantly the
/// authority not yet seeing a freshly published DNS record) are surfaced
/// as-is so the caller's retry policy can own the clock.
///
/// Implementations are stateless RPC stubs and safe for concurrent use
/// behind an `Arc`.
#[async_trait]
pub trait SiteVerifier: Send + Sync {
    /// Authority identifier, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the verification token for `domain`.
    ///
    /// The operator must publish the token as a DNS TXT record on the
    /// domain before [`insert`](Self::insert) can succeed.
    async fn get_token(&self, domain: &str) -> Result<String>;

    /// Ask the authority to verify ownership of `domain`.
    ///
    /// Fails while the proof record is not yet visible to the authority;
    /// the returned error carries the authority's diagnostic text.
    async fn insert(&self, domain: &str) -> Result<WebResource>;

    /// Fetch the verification resource identified by `id`.
    ///
    /// Used as an existence check; a failure does not distinguish
    /// "not found" from transient transport trouble.
    async fn get(&self, id: &str) -> Result<WebResource>;

    /// Delete the verification resource identified by `id`.
    async fn delete(&self, id: &str) -> Result<()>;
}
