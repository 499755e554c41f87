//! Provider configuration
//!
//! Credentials and connection settings for the remote API. Record settings
//! live in [`RecordData`](crate::resource::RecordData).

use serde::{Deserialize, Serialize};

/// Environment variable holding a scoped API token
pub const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
/// Environment variable holding the account e-mail for global-key auth
pub const ENV_EMAIL: &str = "CLOUDFLARE_EMAIL";
/// Environment variable holding the global API key
pub const ENV_API_KEY: &str = "CLOUDFLARE_API_KEY";
/// Legacy name of [`ENV_API_KEY`]
pub const ENV_LEGACY_TOKEN: &str = "CLOUDFLARE_TOKEN";
/// Environment variable overriding the API base URL
pub const ENV_API_BASE: &str = "CLOUDFLARE_API_BASE";

/// Provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// How to authenticate against the API
    pub credentials: Credentials,

    /// API base URL; the provider's public endpoint when unset
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// API credentials
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credentials {
    /// Scoped API token (bearer auth)
    ApiToken {
        /// API token
        token: String,
    },

    /// Account e-mail plus global API key
    ApiKey {
        /// Account e-mail
        email: String,
        /// Global API key
        key: String,
    },
}

impl ProviderConfig {
    /// Create a token-authenticated configuration
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::ApiToken {
                token: token.into(),
            },
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Create a configuration using e-mail + global API key
    pub fn with_api_key(email: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::ApiKey {
                email: email.into(),
                key: key.into(),
            },
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Load configuration from environment variables
    ///
    /// A token in `CLOUDFLARE_API_TOKEN` wins; otherwise `CLOUDFLARE_EMAIL`
    /// together with `CLOUDFLARE_API_KEY` (or the older `CLOUDFLARE_TOKEN`)
    /// is used.
    pub fn from_env() -> Result<Self, crate::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, crate::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = if let Some(token) = non_empty(ENV_API_TOKEN) {
            Self::with_token(token)
        } else {
            let email = non_empty(ENV_EMAIL);
            let key = non_empty(ENV_API_KEY).or_else(|| non_empty(ENV_LEGACY_TOKEN));
            match (email, key) {
                (Some(email), Some(key)) => Self::with_api_key(email, key),
                _ => {
                    return Err(crate::Error::config(format!(
                        "{ENV_API_TOKEN}, or {ENV_EMAIL} and {ENV_API_KEY}, must be set"
                    )));
                }
            }
        };

        config.base_url = non_empty(ENV_API_BASE);
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match &self.credentials {
            Credentials::ApiToken { token } => {
                if token.is_empty() {
                    return Err(crate::Error::config("API token cannot be empty"));
                }
            }
            Credentials::ApiKey { email, key } => {
                if email.is_empty() || key.is_empty() {
                    return Err(crate::Error::config(
                        "API e-mail and key must both be non-empty",
                    ));
                }
            }
        }

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("https://")
            && !base_url.starts_with("http://")
        {
            return Err(crate::Error::config(format!(
                "API base URL must use HTTP or HTTPS scheme. Got: {base_url}"
            )));
        }

        if self.timeout_secs == 0 {
            return Err(crate::Error::config("Request timeout must be > 0"));
        }

        Ok(())
    }
}

// Custom Debug implementations that hide the secrets
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiToken { .. } => f
                .debug_struct("ApiToken")
                .field("token", &"<REDACTED>")
                .finish(),
            Credentials::ApiKey { email, .. } => f
                .debug_struct("ApiKey")
                .field("email", email)
                .field("key", &"<REDACTED>")
                .finish(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
