//! Cloudflare API v4 wire types

use chrono::{DateTime, Utc};
use dnsrec_core::record::DnsRecord;
use serde::{Deserialize, Serialize};

/// Response envelope shared by every endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct CloudflareResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<CloudflareMessage>,
    pub result: Option<T>,
}

/// Entry of the `errors` array
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CloudflareMessage {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CloudflareZone {
    pub id: String,
    pub name: String,
}

/// DNS record as returned by the API
#[derive(Debug, Deserialize)]
pub(crate) struct CloudflareDnsRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: Option<u32>,
    pub priority: Option<u16>,
    pub proxied: Option<bool>,
    pub zone_id: Option<String>,
    pub zone_name: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
    pub modified_on: Option<DateTime<Utc>>,
}

impl From<CloudflareDnsRecord> for DnsRecord {
    fn from(record: CloudflareDnsRecord) -> Self {
        DnsRecord {
            id: record.id,
            record_type: record.record_type,
            name: record.name,
            content: record.content,
            ttl: record.ttl,
            priority: record.priority,
            proxied: record.proxied.unwrap_or(false),
            zone_id: record.zone_id,
            zone_name: record.zone_name,
            created_on: record.created_on,
            modified_on: record.modified_on,
        }
    }
}

/// Body of create (POST) and update (PUT) requests
#[derive(Debug, Serialize)]
pub(crate) struct RecordBody<'a> {
    #[serde(rename = "type")]
    pub record_type: &'a str,
    pub name: &'a str,
    pub content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    pub proxied: bool,
}

impl<'a> From<&'a DnsRecord> for RecordBody<'a> {
    fn from(record: &'a DnsRecord) -> Self {
        Self {
            record_type: &record.record_type,
            name: &record.name,
            content: &record.content,
            ttl: record.ttl,
            priority: record.priority,
            proxied: record.proxied,
        }
    }
}
