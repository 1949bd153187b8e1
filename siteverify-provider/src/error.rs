use serde::{Deserialize, Serialize};

/// Unified error type for all verification client operations.
///
/// All variants are serializable for structured error reporting.
///
/// # Message fidelity
///
/// [`Api`](Self::Api) carries the authority's diagnostic text verbatim.
/// The Site Verification API reports several workflow-relevant conditions
/// (most importantly "the proof token is still published") only through
/// that text, so callers classify retryability by matching on it. Nothing
/// in this crate rewrites or truncates the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The configured credentials path does not exist on disk.
    CredentialsNotFound {
        /// The path that was checked.
        path: String,
    },

    /// Application default credential discovery failed.
    ///
    /// Returned only when no inline credentials were configured.
    NoDefaultCredentials {
        /// Discovery error details.
        detail: String,
    },

    /// Credential material was present but rejected (malformed key JSON,
    /// token exchange refused).
    InvalidCredentials {
        /// Error details.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The authority rejected the request.
    ///
    /// `message` is the authority's diagnostic text, untouched.
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Original error message from the authority.
        message: String,
    },

    /// Failed to parse the authority's API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在、传播竞争等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::CredentialsNotFound { .. }
                | Self::NoDefaultCredentials { .. }
                | Self::InvalidCredentials { .. }
                | Self::Api { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CredentialsNotFound { path } => {
                write!(f, "Credentials file not found: {path}")
            }
            Self::NoDefaultCredentials { detail } => {
                write!(f, "No application default credentials: {detail}")
            }
            Self::InvalidCredentials { detail } => {
                write!(f, "Invalid credentials: {detail}")
            }
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
