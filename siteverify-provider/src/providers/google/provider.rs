//! Google SiteVerifier trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::SiteVerifier;
use crate::types::WebResource;

use super::{
    GoogleSiteVerification, InsertRequest, METHOD_DNS_TXT, SITE_TYPE_INET_DOMAIN, SiteBody,
    TokenRequest, TokenResponse, WebResourceResponse,
};

impl GoogleSiteVerification {
    fn site_body(domain: &str) -> SiteBody {
        SiteBody {
            identifier: domain.to_string(),
            site_type: SITE_TYPE_INET_DOMAIN.to_string(),
        }
    }
}

#[async_trait]
impl SiteVerifier for GoogleSiteVerification {
    fn id(&self) -> &'static str {
        "google-siteverification"
    }

    async fn get_token(&self, domain: &str) -> Result<String> {
        let body = TokenRequest {
            site: Self::site_body(domain),
            verification_method: METHOD_DNS_TXT.to_string(),
        };
        let response: TokenResponse = self.post_json("/token", &body).await?;
        Ok(response.token)
    }

    async fn insert(&self, domain: &str) -> Result<WebResource> {
        let body = InsertRequest {
            site: Self::site_body(domain),
        };
        let response: WebResourceResponse = self
            .post_json(
                &format!("/webResource?verificationMethod={METHOD_DNS_TXT}"),
                &body,
            )
            .await?;
        Ok(response.into())
    }

    async fn get(&self, id: &str) -> Result<WebResource> {
        // Ids are scheme-qualified (`dns://…`) and must be escaped to live
        // in a path segment.
        let response: WebResourceResponse = self
            .get_json(&format!("/webResource/{}", urlencoding::encode(id)))
            .await?;
        Ok(response.into())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.delete_path(&format!("/webResource/{}", urlencoding::encode(id)))
            .await
    }
}
