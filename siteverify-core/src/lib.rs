//! # siteverify-core
//!
//! Core lifecycle logic for managing domain ownership verification against
//! the Google Site Verification authority:
//!
//! - Token query (the DNS TXT record an operator must publish)
//! - Verification resource lifecycle (create / read / delete / import)
//! - Deadline-bounded retry around eventually-consistent DNS propagation
//! - Legacy resource-id normalization
//!
//! The controller is stateless: the authority owns all resource state, and
//! every operation re-derives "current state" from it. The orchestration
//! layer injects an authenticated client (see `siteverify-provider`) plus
//! timeout budgets through [`VerifierContext`] and keeps whatever the
//! operations return.

pub mod error;
pub mod manifest;
pub mod resource_id;
mod retry;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{TokenService, VerificationService, VerifierContext};
pub use types::{DnsTokenRecord, VerificationResource, VerificationTimeouts};

// Re-export client 库的公共类型
pub use siteverify_provider::{
    Credentials, GoogleSiteVerification, ProviderError, SITE_VERIFICATION_SCOPE, SiteVerifier,
    VerifiedSite, WebResource, create_verifier,
};
