//! Record resource lifecycle
//!
//! The four lifecycle operations plus import. Each one takes the API handle
//! as a parameter and works on one [`RecordData`]:
//!
//! ```text
//!            create                      update
//!  absent ───────────▶ present ◀───────────────┐
//!     ▲                  │  │                  │
//!     │     delete       │  └──────────────────┘
//!     └──────────────────┘
//!     ▲                  │
//!     └──── read (record gone remotely) ───────┘
//! ```
//!
//! Every operation resolves the zone first and does not cache it.

pub mod import;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::record::{
    apply_remote, create_request, update_request, validate_record_content, validate_record_type,
};
use crate::traits::DnsApi;

pub use import::{ImportId, import_record};

/// Local configuration and state of one record resource
///
/// `id` is empty while the record is absent. `ttl` and `zone_id` are
/// computed by the provider and filled in by [`read_record`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordData {
    /// Provider-assigned identifier, empty when absent
    #[serde(default)]
    pub id: String,

    /// Zone domain (immutable after creation)
    pub domain: String,

    /// Name relative to the domain; empty addresses the apex.
    /// `name` is the deprecated spelling.
    #[serde(default, alias = "name")]
    pub subdomain: String,

    /// Record type (immutable after creation)
    #[serde(rename = "type")]
    pub record_type: String,

    /// Record content
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,

    /// Proxy through the provider's edge; `None` means not configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,

    /// Zone identifier, derived from `domain`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

impl RecordData {
    /// Create record data for the zone apex
    pub fn new(
        domain: impl Into<String>,
        record_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type: record_type.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Set the subdomain
    pub fn with_subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = subdomain.into();
        self
    }

    /// Set the TTL
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the proxied flag
    pub fn with_proxied(mut self, proxied: bool) -> Self {
        self.proxied = Some(proxied);
        self
    }

    /// Whether a remote record is tracked
    pub fn is_present(&self) -> bool {
        !self.id.is_empty()
    }

    /// Fully-qualified record name
    pub fn full_name(&self) -> String {
        crate::record::record_name(&self.subdomain, &self.domain)
    }
}

/// Create the remote record and adopt it.
///
/// Content and type are validated before any remote call. On success the id
/// and zone id are stored and the record is re-read from the provider.
pub async fn create_record<A>(api: &A, data: &mut RecordData) -> Result<()>
where
    A: DnsApi + ?Sized,
{
    let name = data.full_name();

    validate_record_content(&data.record_type, &data.value)
        .map_err(|e| Error::config(format!("Error validating record name {name:?}: {e}")))?;
    validate_record_type(&data.record_type, data.proxied.unwrap_or(false)).map_err(|e| {
        Error::config(format!(
            "Error validating record type {:?}: {e}",
            data.record_type
        ))
    })?;

    let zone_id = api.zone_id_by_name(&data.domain).await?;
    data.zone_id = Some(zone_id.clone());

    let record = create_request(data, &zone_id);
    debug!(provider = api.provider_name(), ?record, "Record create configuration");

    let created = api.create_dns_record(&zone_id, &record).await?;

    // An empty id means the provider accepted the call but returned no record
    if created.id.is_empty() {
        return Err(Error::provider(
            api.provider_name(),
            "Failed to find record in create response; record was empty",
        ));
    }

    data.id = created.id;
    info!(record_id = %data.id, name = %name, "Record created");

    read_record(api, data).await
}

/// Refresh local data from the remote record.
///
/// A record the provider no longer knows is treated as deleted: the local id
/// is cleared and the call succeeds. Reading an absent record is a no-op.
pub async fn read_record<A>(api: &A, data: &mut RecordData) -> Result<()>
where
    A: DnsApi + ?Sized,
{
    if !data.is_present() {
        return Ok(());
    }

    let zone_id = api.zone_id_by_name(&data.domain).await?;

    let record = match api.dns_record(&zone_id, &data.id).await {
        Ok(record) => record,
        Err(e) if e.is_not_found() => {
            warn!(record_id = %data.id, domain = %data.domain, "Record not found remotely, removing from state");
            data.id.clear();
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    apply_remote(data, &record, &zone_id);
    Ok(())
}

/// Push local data to the existing remote record, then re-read it.
pub async fn update_record<A>(api: &A, data: &mut RecordData) -> Result<()>
where
    A: DnsApi + ?Sized,
{
    if !data.is_present() {
        return Err(Error::config(format!(
            "Cannot update record {:?}: it has no id, create it first",
            data.full_name()
        )));
    }

    let zone_id = api.zone_id_by_name(&data.domain).await?;

    let record = update_request(data, &zone_id);
    debug!(provider = api.provider_name(), ?record, "Record update configuration");

    api.update_dns_record(&zone_id, &data.id, &record).await?;

    read_record(api, data).await
}

/// Delete the remote record.
///
/// Deleting a record that is already gone succeeds. On any other failure the
/// local id is kept, since the record is presumed still present.
pub async fn delete_record<A>(api: &A, data: &mut RecordData) -> Result<()>
where
    A: DnsApi + ?Sized,
{
    if !data.is_present() {
        debug!(domain = %data.domain, "No record id, nothing to delete");
        return Ok(());
    }

    let zone_id = api.zone_id_by_name(&data.domain).await?;

    info!(domain = %data.domain, record_id = %data.id, "Deleting record");

    match api.delete_dns_record(&zone_id, &data.id).await {
        Ok(()) => {}
        Err(e) if e.is_not_found() => {
            debug!(record_id = %data.id, "Record already absent");
        }
        Err(e) => return Err(e),
    }

    data.id.clear();
    Ok(())
}
