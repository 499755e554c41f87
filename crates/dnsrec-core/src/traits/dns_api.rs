// # DNS API Trait
//
// Defines the remote operations the record lifecycle is built on.
//
// ## Implementations
//
// - Cloudflare: `dnsrec-provider-cloudflare` crate
//
// ## Usage
//
// ```rust,ignore
// use dnsrec_core::{DnsApi, RecordData};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let api = /* DnsApi implementation */;
//
//     let mut data = RecordData::new("example.com", "A", "192.0.2.1")
//         .with_subdomain("www");
//     dnsrec_core::create_record(&api, &mut data).await?;
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::record::{DnsRecord, RecordFilter};

/// Trait for remote DNS API implementations
///
/// One method per remote call. Lifecycle operations receive the handle as a
/// parameter; implementations hold no per-resource state.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: the host may run operations for
/// different resources concurrently against one shared handle.
///
/// # Error Classification
///
/// Implementations must report a missing record (including an identifier
/// the provider rejects as invalid) as
/// [`Error::RecordNotFound`](crate::Error::RecordNotFound) and a missing
/// zone as [`Error::ZoneNotFound`](crate::Error::ZoneNotFound). Read and
/// delete rely on the former to detect absence.
///
/// # No Retry Logic
///
/// Implementations make one request per call and return errors as-is.
#[async_trait]
pub trait DnsApi: Send + Sync {
    /// Resolve a domain name to the provider's zone identifier
    async fn zone_id_by_name(&self, zone_name: &str) -> Result<String, crate::Error>;

    /// Create a record; returns the record as stored, including its new id
    async fn create_dns_record(
        &self,
        zone_id: &str,
        record: &DnsRecord,
    ) -> Result<DnsRecord, crate::Error>;

    /// Fetch a record by identifier
    async fn dns_record(&self, zone_id: &str, record_id: &str)
    -> Result<DnsRecord, crate::Error>;

    /// List records matching a filter
    async fn dns_records(
        &self,
        zone_id: &str,
        filter: &RecordFilter,
    ) -> Result<Vec<DnsRecord>, crate::Error>;

    /// Replace a record by identifier
    async fn update_dns_record(
        &self,
        zone_id: &str,
        record_id: &str,
        record: &DnsRecord,
    ) -> Result<(), crate::Error>;

    /// Delete a record by identifier
    async fn delete_dns_record(&self, zone_id: &str, record_id: &str) -> Result<(), crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}

/// Helper trait for constructing API clients from configuration
pub trait DnsApiFactory: Send + Sync {
    /// Create a DnsApi instance from configuration
    fn create(
        &self,
        config: &crate::config::ProviderConfig,
    ) -> Result<Box<dyn DnsApi>, crate::Error>;
}
