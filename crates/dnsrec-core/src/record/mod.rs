//! Remote record representation and the local <-> remote translation
//!
//! - [`name`]: fully-qualified name composition and decomposition
//! - [`validate`]: pre-flight content and type checks
//! - [`translate`]: forward and reverse field mapping

pub mod name;
pub mod translate;
pub mod validate;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use name::{record_name, subdomain_name};
pub use translate::{apply_remote, create_request, update_request};
pub use validate::{validate_record_content, validate_record_type};

/// A DNS record as the provider sees it
///
/// `id` stays empty until the provider has created the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Provider-assigned identifier
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Record type (A, AAAA, CNAME, ...)
    #[serde(rename = "type")]
    pub record_type: String,

    /// Fully-qualified record name
    pub name: String,

    /// Record content (address, target, text, ...)
    pub content: String,

    /// Time-to-live; `None` leaves the provider default in effect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    /// Priority for MX/SRV style records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,

    /// Whether traffic is routed through the provider's edge
    #[serde(default)]
    pub proxied: bool,

    /// Owning zone identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,

    /// Owning zone name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

/// Filter for listing records within a zone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Exact fully-qualified name
    pub name: Option<String>,
    /// Exact record type
    pub record_type: Option<String>,
}

impl RecordFilter {
    /// Filter on name and type together
    pub fn by_name_and_type(name: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            record_type: Some(record_type.into()),
        }
    }

    /// Whether a record satisfies every set criterion
    pub fn matches(&self, record: &DnsRecord) -> bool {
        self.name.as_ref().is_none_or(|name| *name == record.name)
            && self
                .record_type
                .as_ref()
                .is_none_or(|record_type| *record_type == record.record_type)
    }
}
