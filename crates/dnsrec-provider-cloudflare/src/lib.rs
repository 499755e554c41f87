// # Cloudflare DNS API Adapter
//
// Implements `dnsrec_core::DnsApi` against the Cloudflare API v4.
//
// - ✅ One HTTP request per trait call
// - ✅ HTTP timeout configured (30 seconds by default)
// - ✅ API token or e-mail + global API key authentication
// - ✅ Structured error classification (record not found, zone not found,
//      authentication, rate limiting, transient server errors)
// - ❌ NO retry or backoff logic (owned by the caller)
// - ❌ NO caching of zone ids
//
// ## Security Requirements
//
// - Credentials NEVER appear in logs or Debug output
// - Client construction fails fast if credentials are empty
//
// ## API Reference
//
// - Cloudflare API v4: https://developers.cloudflare.com/api/
// - List Zones: GET `/zones?name=...`
// - Create DNS Record: POST `/zones/:zone_id/dns_records`
// - DNS Record Details: GET `/zones/:zone_id/dns_records/:record_id`
// - List DNS Records: GET `/zones/:zone_id/dns_records?name=...&type=...`
// - Update DNS Record: PUT `/zones/:zone_id/dns_records/:record_id`
// - Delete DNS Record: DELETE `/zones/:zone_id/dns_records/:record_id`

mod types;

use async_trait::async_trait;
use dnsrec_core::config::{Credentials, ProviderConfig};
use dnsrec_core::record::{DnsRecord, RecordFilter};
use dnsrec_core::traits::{DnsApi, DnsApiFactory};
use dnsrec_core::{Error, Result};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use types::{CloudflareDnsRecord, CloudflareMessage, CloudflareResponse, CloudflareZone, RecordBody};

/// Cloudflare API base URL
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Message the API returns for an unknown or malformed record id
pub const RECORD_NOT_FOUND_MESSAGE: &str = "Invalid dns record identifier";

/// API error code for a record that does not exist
const RECORD_NOT_FOUND_CODE: i64 = 81044;

/// API error codes for rejected credentials
/// 6003: Invalid request headers
/// 6103: Invalid format for X-Auth-Key header
/// 6111: Invalid format for Authorization header
/// 9109: Unauthorized to access requested resource
/// 10000: Authentication error
const AUTH_ERROR_CODES: &[i64] = &[6003, 6103, 6111, 9109, 10000];

const PROVIDER: &str = "cloudflare";

/// What a request was about, for error classification
#[derive(Debug, Clone, Copy, Default)]
struct RequestContext<'a> {
    zone_name: Option<&'a str>,
    record_id: Option<&'a str>,
}

/// Cloudflare DNS API client
///
/// Stateless apart from the HTTP connection pool; safe to share between
/// concurrently managed records.
pub struct CloudflareClient {
    /// ⚠️ NEVER log this value
    credentials: Credentials,

    /// API base URL
    base_url: Url,

    /// HTTP client for API requests
    client: reqwest::Client,
}

// Custom Debug implementation that hides the credentials
impl std::fmt::Debug for CloudflareClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl CloudflareClient {
    /// Create a client from provider configuration
    ///
    /// Fails if the configuration does not validate or the HTTP client
    /// cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        let base = config.base_url.as_deref().unwrap_or(CLOUDFLARE_API_BASE);
        let base_url = Url::parse(base)
            .map_err(|e| Error::config(format!("Invalid API base URL {base:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!("Invalid API base URL {base:?}")));
        }

        Ok(Self {
            credentials: config.credentials.clone(),
            base_url,
            client,
        })
    }

    /// Create a token-authenticated client against the public endpoint
    pub fn with_token(api_token: impl Into<String>) -> Result<Self> {
        Self::new(&ProviderConfig::with_token(api_token))
    }

    /// Build an endpoint URL below the base from path segments.
    ///
    /// Segments are percent-encoded, so ids cannot escape their path
    /// position. An empty segment would address a different endpoint and
    /// is rejected.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(Error::config(format!(
                "Cannot build request URL: empty id in path {segments:?}"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::config("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Credentials::ApiToken { token } => request.bearer_auth(token),
            Credentials::ApiKey { email, key } => request
                .header("X-Auth-Email", email)
                .header("X-Auth-Key", key),
        }
    }

    /// Send one request and unwrap the response envelope
    async fn request<T, B>(
        &self,
        method: Method,
        url: Url,
        query: &[(&str, &str)],
        body: Option<&B>,
        ctx: RequestContext<'_>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .authorize(self.client.request(method, url))
            .header("Content-Type", "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::http(format!("Failed to read response: {e}")))?;

        tracing::debug!("Response status: {}", status);

        parse_response(status, &text, ctx)
    }
}

/// Unwrap a response envelope, or classify the failure
fn parse_response<T: DeserializeOwned>(
    status: StatusCode,
    text: &str,
    ctx: RequestContext<'_>,
) -> Result<T> {
    let envelope: Option<CloudflareResponse<T>> = serde_json::from_str(text).ok();

    match envelope {
        Some(envelope) if status.is_success() && envelope.success => envelope
            .result
            .ok_or_else(|| Error::provider(PROVIDER, "Invalid response format: result is missing")),
        Some(envelope) => Err(classify_error(status, &envelope.errors, ctx)),
        None if status.is_success() => Err(Error::provider(
            PROVIDER,
            format!("Failed to parse response: {text}"),
        )),
        None => Err(classify_error(
            status,
            &[CloudflareMessage {
                code: 0,
                message: text.to_string(),
            }],
            ctx,
        )),
    }
}

/// Map a failed response onto the core error taxonomy
fn classify_error(
    status: StatusCode,
    errors: &[CloudflareMessage],
    ctx: RequestContext<'_>,
) -> Error {
    let message = if errors.is_empty() {
        format!("Unknown error (status {status})")
    } else {
        errors
            .iter()
            .map(|e| format!("{}: {}", e.code, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    };

    let record_missing = errors.iter().any(|e| {
        e.code == RECORD_NOT_FOUND_CODE || e.message.contains(RECORD_NOT_FOUND_MESSAGE)
    });
    if let Some(record_id) = ctx.record_id
        && (record_missing || status == StatusCode::NOT_FOUND)
    {
        return Error::record_not_found(record_id);
    }

    if status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || errors.iter().any(|e| AUTH_ERROR_CODES.contains(&e.code))
    {
        return Error::auth(format!(
            "Invalid API credentials or insufficient permissions. Status: {status} - {message}"
        ));
    }

    if let Some(zone_name) = ctx.zone_name
        && status == StatusCode::NOT_FOUND
    {
        return Error::zone_not_found(zone_name);
    }

    match status.as_u16() {
        429 => Error::rate_limited(format!(
            "Rate limit exceeded. Please retry later. Status: {status}"
        )),
        500..=599 => Error::http(format!(
            "Cloudflare server error (transient): {status} - {message}"
        )),
        _ => match errors.first() {
            Some(first) if first.code != 0 => {
                Error::provider_code(PROVIDER, first.code, message)
            }
            _ => Error::provider(PROVIDER, message),
        },
    }
}

#[async_trait]
impl DnsApi for CloudflareClient {
    async fn zone_id_by_name(&self, zone_name: &str) -> Result<String> {
        tracing::debug!("Looking up zone ID for domain: {}", zone_name);

        let ctx = RequestContext {
            zone_name: Some(zone_name),
            ..Default::default()
        };
        let zones: Vec<CloudflareZone> = self
            .request(
                Method::GET,
                self.endpoint(&["zones"])?,
                &[("name", zone_name)],
                None::<&()>,
                ctx,
            )
            .await?;

        let zone = zones
            .into_iter()
            .find(|zone| zone.name == zone_name)
            .ok_or_else(|| Error::zone_not_found(zone_name))?;

        tracing::debug!("Found zone ID: {}", zone.id);
        Ok(zone.id)
    }

    async fn create_dns_record(&self, zone_id: &str, record: &DnsRecord) -> Result<DnsRecord> {
        let body = RecordBody::from(record);
        let created: CloudflareDnsRecord = self
            .request(
                Method::POST,
                self.endpoint(&["zones", zone_id, "dns_records"])?,
                &[],
                Some(&body),
                RequestContext::default(),
            )
            .await?;
        Ok(created.into())
    }

    async fn dns_record(&self, zone_id: &str, record_id: &str) -> Result<DnsRecord> {
        let ctx = RequestContext {
            record_id: Some(record_id),
            ..Default::default()
        };
        let record: CloudflareDnsRecord = self
            .request(
                Method::GET,
                self.endpoint(&["zones", zone_id, "dns_records", record_id])?,
                &[],
                None::<&()>,
                ctx,
            )
            .await?;
        Ok(record.into())
    }

    async fn dns_records(&self, zone_id: &str, filter: &RecordFilter) -> Result<Vec<DnsRecord>> {
        let mut query = Vec::new();
        if let Some(ref name) = filter.name {
            query.push(("name", name.as_str()));
        }
        if let Some(ref record_type) = filter.record_type {
            query.push(("type", record_type.as_str()));
        }

        tracing::debug!("Listing records: {:?}", filter);

        let records: Vec<CloudflareDnsRecord> = self
            .request(
                Method::GET,
                self.endpoint(&["zones", zone_id, "dns_records"])?,
                &query,
                None::<&()>,
                RequestContext::default(),
            )
            .await?;
        Ok(records.into_iter().map(DnsRecord::from).collect())
    }

    async fn update_dns_record(
        &self,
        zone_id: &str,
        record_id: &str,
        record: &DnsRecord,
    ) -> Result<()> {
        let ctx = RequestContext {
            record_id: Some(record_id),
            ..Default::default()
        };
        let body = RecordBody::from(record);
        let _: serde_json::Value = self
            .request(
                Method::PUT,
                self.endpoint(&["zones", zone_id, "dns_records", record_id])?,
                &[],
                Some(&body),
                ctx,
            )
            .await?;
        Ok(())
    }

    async fn delete_dns_record(&self, zone_id: &str, record_id: &str) -> Result<()> {
        let ctx = RequestContext {
            record_id: Some(record_id),
            ..Default::default()
        };
        let _: serde_json::Value = self
            .request(
                Method::DELETE,
                self.endpoint(&["zones", zone_id, "dns_records", record_id])?,
                &[],
                None::<&()>,
                ctx,
            )
            .await?;
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

/// Factory for creating Cloudflare clients
pub struct CloudflareFactory;

impl DnsApiFactory for CloudflareFactory {
    fn create(&self, config: &ProviderConfig) -> Result<Box<dyn DnsApi>> {
        Ok(Box::new(CloudflareClient::new(config)?))
    }
}
