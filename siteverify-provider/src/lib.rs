//! # siteverify-provider
//!
//! A client library for the [Google Site Verification API], covering the
//! four operations an ownership-verification workflow needs:
//!
//! | Operation | Endpoint | Purpose |
//! |-----------|----------|---------|
//! | `get_token` | `POST /token` | Fetch the DNS TXT token to publish |
//! | `insert` | `POST /webResource` | Ask the authority to verify the domain |
//! | `get` | `GET /webResource/{id}` | Check that a verification still exists |
//! | `delete` | `DELETE /webResource/{id}` | Unverify a domain |
//!
//! Each call is a single request/response round trip. The library never
//! retries internally; callers own the retry policy because the interesting
//! failures (DNS propagation races) are workflow-level concerns.
//!
//! [Google Site Verification API]: https://developers.google.com/site-verification
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use siteverify_provider::create_verifier;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build a client. `None` falls back to application default credentials.
//!     let verifier = create_verifier(None).await?;
//!
//!     // 2. Fetch the token the operator must publish as a DNS TXT record.
//!     let token = verifier.get_token("example.com").await?;
//!     println!("publish TXT record: {token}");
//!
//!     // 3. Once the record is visible, ask the authority to verify.
//!     let resource = verifier.insert("example.com").await?;
//!     println!("verified as {}", resource.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Credentials
//!
//! [`create_verifier`] accepts an optional string that is either the JSON
//! contents of a service account key or a path to one; when absent, the
//! standard application-default-credentials chain is used. See
//! [`Credentials`] for the exact decision order.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError).
//! Authority-side failures surface as [`ProviderError::Api`] with the
//! diagnostic message preserved verbatim, because the API exposes no
//! structured error code for several workflow-relevant conditions and
//! callers must classify by message text.

mod credentials;
mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export credential resolution
pub use credentials::{Credentials, SITE_VERIFICATION_SCOPE};

// Re-export factory function
pub use factory::create_verifier;

// Re-export core trait only (internal traits are not exported)
pub use traits::SiteVerifier;

// Re-export types
pub use types::{VerifiedSite, WebResource};

// Re-export the concrete authority client
pub use providers::GoogleSiteVerification;
