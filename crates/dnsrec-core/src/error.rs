//! Error types for dnsrec
//!
//! Every lifecycle operation returns [`Result`]. The dispatcher decides what
//! to swallow by error *kind*, never by message text: provider adapters are
//! responsible for classifying their responses into these variants.

use thiserror::Error;

/// Result type alias for dnsrec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Local configuration failed validation; no remote call was made
    #[error("Configuration error: {0}")]
    Config(String),

    /// No zone matches the requested domain
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    /// The remote record does not exist (or the identifier is invalid)
    #[error("Record not found: {id}")]
    RecordNotFound {
        /// Identifier that was looked up
        id: String,
    },

    /// Import identifier was not `subdomain|domain|type`
    #[error("Invalid import identifier: expecting subdomain|domain|type, got {0:?}")]
    ImportFormat(String),

    /// Import lookup did not resolve to exactly one record
    #[error("Expected 1 record named {name} of type {record_type}, got {count}")]
    ImportAmbiguous {
        /// Fully-qualified name that was searched for
        name: String,
        /// Record type that was searched for
        record_type: String,
        /// Number of matching records
        count: usize,
    },

    /// Authentication errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limiting errors
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Transport-level HTTP errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Provider-specific API error
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Provider error code, when reported
        code: Option<i64>,
        /// Error message
        message: String,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a zone-not-found error
    pub fn zone_not_found(domain: impl Into<String>) -> Self {
        Self::ZoneNotFound(domain.into())
    }

    /// Create a record-not-found error
    pub fn record_not_found(id: impl Into<String>) -> Self {
        Self::RecordNotFound { id: id.into() }
    }

    /// Create an import format error
    pub fn import_format(id: impl Into<String>) -> Self {
        Self::ImportFormat(id.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a rate limit error
    pub fn rate_limited(msg: impl Into<String>) -> Self {
        Self::RateLimited(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            code: None,
            message: message.into(),
        }
    }

    /// Create a provider-specific error carrying the provider's error code
    pub fn provider_code(
        provider: impl Into<String>,
        code: i64,
        message: impl Into<String>,
    ) -> Self {
        Self::Provider {
            provider: provider.into(),
            code: Some(code),
            message: message.into(),
        }
    }

    /// Whether the error means the remote record is gone.
    ///
    /// Read and delete treat this as absence rather than failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }

    /// Whether a caller that owns retry policy may reasonably retry.
    ///
    /// Nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited(_) | Self::Http(_) => true,
            Self::Provider { code: Some(code), .. } => (500..=599).contains(code),
            _ => false,
        }
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(Error::record_not_found("abc").is_not_found());
        assert!(!Error::zone_not_found("example.com").is_not_found());
        assert!(!Error::provider("cloudflare", "Invalid dns record identifier").is_not_found());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(Error::rate_limited("slow down").is_retryable());
        assert!(Error::http("connection reset").is_retryable());
        assert!(Error::provider_code("cloudflare", 503, "unavailable").is_retryable());
        assert!(!Error::provider_code("cloudflare", 9005, "bad content").is_retryable());
        assert!(!Error::config("bad").is_retryable());
    }

    #[test]
    fn test_display_messages() {
        let err = Error::import_format("a|b");
        assert_eq!(
            err.to_string(),
            "Invalid import identifier: expecting subdomain|domain|type, got \"a|b\""
        );

        let err = Error::ImportAmbiguous {
            name: "www.example.com".to_string(),
            record_type: "A".to_string(),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "Expected 1 record named www.example.com of type A, got 2"
        );
    }

    #[test]
    fn test_from_anyhow() {
        let err: Error = anyhow::anyhow!("boom").into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "boom"));
    }
}
