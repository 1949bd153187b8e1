//! Google Site Verification API 类型定义

use serde::{Deserialize, Serialize};

use crate::types::{VerifiedSite, WebResource};

/// `POST /token` 请求体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TokenRequest {
    pub site: SiteBody,
    pub verification_method: String,
}

/// 请求中的 site 字段（token / webResource 共用）
#[derive(Debug, Serialize)]
pub(crate) struct SiteBody {
    pub identifier: String,
    #[serde(rename = "type")]
    pub site_type: String,
}

/// `POST /token` 响应
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub method: Option<String>,
}

/// `POST /webResource` 请求体
#[derive(Debug, Serialize)]
pub(crate) struct InsertRequest {
    pub site: SiteBody,
}

/// webResource 资源（响应）
#[derive(Debug, Deserialize)]
pub(crate) struct WebResourceResponse {
    pub id: String,
    #[serde(default)]
    pub site: Option<SiteResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SiteResponse {
    pub identifier: String,
    #[serde(rename = "type")]
    pub site_type: String,
}

impl From<WebResourceResponse> for WebResource {
    fn from(raw: WebResourceResponse) -> Self {
        Self {
            id: raw.id,
            site: raw.site.map(|s| VerifiedSite {
                identifier: s.identifier,
                site_type: s.site_type,
            }),
        }
    }
}

/// Google API 通用错误信封
/// `{"error": {"code": 400, "message": "...", "errors": [{"reason": "...", ...}]}}`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    #[allow(dead_code)]
    pub code: Option<u16>,
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorItem {
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_request_wire_shape() {
        let req = TokenRequest {
            site: SiteBody {
                identifier: "example.com".to_string(),
                site_type: "INET_DOMAIN".to_string(),
            },
            verification_method: "DNS_TXT".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"verificationMethod\":\"DNS_TXT\""));
        assert!(json.contains("\"type\":\"INET_DOMAIN\""));
        assert!(json.contains("\"identifier\":\"example.com\""));
    }

    #[test]
    fn web_resource_response_decodes() {
        let json = r#"{
            "id": "dns%3A%2F%2Fexample.com",
            "site": {"identifier": "example.com", "type": "INET_DOMAIN"},
            "owners": ["sv-agent@demo.iam.gserviceaccount.com"]
        }"#;
        let raw: WebResourceResponse = serde_json::from_str(json).unwrap();
        let resource = WebResource::from(raw);
        assert_eq!(resource.id, "dns%3A%2F%2Fexample.com");
        assert_eq!(resource.site.unwrap().site_type, "INET_DOMAIN");
    }

    #[test]
    fn error_envelope_decodes() {
        let json = r#"{
            "error": {
                "code": 400,
                "message": "Less than 25% of queried nameservers contain the expected token.",
                "errors": [{"domain": "global", "reason": "badRequest"}]
            }
        }"#;
        let envelope: ApiErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.error.errors[0].reason.as_deref(), Some("badRequest"));
        assert!(envelope.error.message.starts_with("Less than 25%"));
    }
}
