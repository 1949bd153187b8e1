//! Google Site Verification HTTP 请求方法

use serde::{Deserialize, Serialize};

use crate::credentials::SITE_VERIFICATION_SCOPE;
use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ApiErrorMapper, RawApiError};

use super::{API_BASE, ApiErrorEnvelope, GoogleSiteVerification};

impl GoogleSiteVerification {
    /// 为本次请求获取 Bearer 头（token 源自带缓存与刷新）
    async fn bearer(&self) -> Result<String> {
        let token = self
            .token_source
            .token(&[SITE_VERIFICATION_SCOPE])
            .await
            .map_err(|e| ProviderError::InvalidCredentials {
                detail: e.to_string(),
            })?;
        Ok(format!("Bearer {}", token.as_str()))
    }

    /// 执行 GET 请求
    pub(crate) async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T> {
        let url = format!("{API_BASE}{path}");
        let bearer = self.bearer().await?;

        let (status, body) = HttpUtils::execute_request(
            self.client.get(&url).header("Authorization", bearer),
            "GET",
            &url,
        )
        .await?;

        self.decode(status, &body)
    }

    /// 执行 POST 请求
    pub(crate) async fn post_json<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{API_BASE}{path}");
        let bearer = self.bearer().await?;

        let (status, text) = HttpUtils::execute_request(
            self.client
                .post(&url)
                .header("Authorization", bearer)
                .json(body),
            "POST",
            &url,
        )
        .await?;

        self.decode(status, &text)
    }

    /// 执行 DELETE 请求（成功时响应体为空）
    pub(crate) async fn delete_path(&self, path: &str) -> Result<()> {
        let url = format!("{API_BASE}{path}");
        let bearer = self.bearer().await?;

        let (status, body) = HttpUtils::execute_request(
            self.client.delete(&url).header("Authorization", bearer),
            "DELETE",
            &url,
        )
        .await?;

        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(self.api_error(status, &body))
        }
    }

    fn decode<T: for<'de> Deserialize<'de>>(&self, status: u16, body: &str) -> Result<T> {
        if (200..300).contains(&status) {
            HttpUtils::parse_json(body)
        } else {
            Err(self.api_error(status, body))
        }
    }

    /// 从错误响应中提取原始消息；无法解析信封时原样保留响应体。
    fn api_error(&self, status: u16, body: &str) -> ProviderError {
        let raw = match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => {
                let reason = envelope
                    .error
                    .errors
                    .first()
                    .and_then(|item| item.reason.clone());
                match reason {
                    Some(reason) => RawApiError::with_reason(status, reason, envelope.error.message),
                    None => RawApiError::new(status, envelope.error.message),
                }
            }
            Err(_) => RawApiError::new(status, body.trim().to_string()),
        };

        let err = self.map_error(raw);
        if err.is_expected() {
            log::warn!("API error: {err}");
        } else {
            log::error!("API error: {err}");
        }
        err
    }
}
