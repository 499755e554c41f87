//! Field mapping between local record data and the provider's record
//!
//! The forward direction differs between create and update in how the
//! proxied flag is derived; see [`update_request`].

use super::DnsRecord;
use super::name::{record_name, subdomain_name};
use crate::resource::RecordData;

/// Build the record sent on create.
///
/// TTL and priority are only carried when set locally so that provider
/// defaults stay in effect. The proxied flag is the local value.
pub fn create_request(data: &RecordData, zone_id: &str) -> DnsRecord {
    DnsRecord {
        record_type: data.record_type.clone(),
        name: record_name(&data.subdomain, &data.domain),
        content: data.value.clone(),
        ttl: data.ttl,
        priority: data.priority,
        proxied: data.proxied.unwrap_or(false),
        zone_id: Some(zone_id.to_string()),
        zone_name: Some(data.domain.clone()),
        ..Default::default()
    }
}

/// Build the record sent on update.
///
/// Unlike create, the proxied flag starts out `false` and is only taken from
/// the local data when explicitly set there. The remote's current proxied
/// state is never inherited.
pub fn update_request(data: &RecordData, zone_id: &str) -> DnsRecord {
    let mut record = DnsRecord {
        id: data.id.clone(),
        record_type: data.record_type.clone(),
        name: record_name(&data.subdomain, &data.domain),
        content: data.value.clone(),
        ttl: data.ttl,
        priority: data.priority,
        proxied: false,
        zone_id: Some(zone_id.to_string()),
        zone_name: Some(data.domain.clone()),
        ..Default::default()
    };

    if let Some(proxied) = data.proxied {
        record.proxied = proxied;
    }

    record
}

/// Project a fetched remote record onto local data.
///
/// `domain` is kept as configured; the subdomain is recomputed against it.
pub fn apply_remote(data: &mut RecordData, record: &DnsRecord, zone_id: &str) {
    data.id = record.id.clone();
    data.record_type = record.record_type.clone();
    data.subdomain = subdomain_name(&record.name, &data.domain);
    data.value = record.content.clone();
    data.ttl = record.ttl;
    data.priority = record.priority;
    data.proxied = Some(record.proxied);
    data.zone_id = Some(zone_id.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> RecordData {
        RecordData::new("example.com", "A", "192.0.2.1").with_subdomain("www")
    }

    #[test]
    fn test_create_request_required_fields() {
        let record = create_request(&data(), "zone-1");
        assert_eq!(record.record_type, "A");
        assert_eq!(record.name, "www.example.com");
        assert_eq!(record.content, "192.0.2.1");
        assert_eq!(record.zone_id.as_deref(), Some("zone-1"));
        assert!(record.id.is_empty());
        assert_eq!(record.ttl, None);
        assert_eq!(record.priority, None);
        assert!(!record.proxied);
    }

    #[test]
    fn test_create_request_optional_fields() {
        let data = data().with_ttl(300).with_priority(10).with_proxied(true);
        let record = create_request(&data, "zone-1");
        assert_eq!(record.ttl, Some(300));
        assert_eq!(record.priority, Some(10));
        assert!(record.proxied);
    }

    #[test]
    fn test_update_request_proxied_defaults_to_false() {
        let mut data = data();
        data.id = "rec-1".to_string();

        let record = update_request(&data, "zone-1");
        assert_eq!(record.id, "rec-1");
        assert!(!record.proxied);

        let record = update_request(&data.with_proxied(true), "zone-1");
        assert!(record.proxied);
    }

    #[test]
    fn test_apply_remote() {
        let mut data = RecordData::new("example.com", "A", "192.0.2.1");
        let remote = DnsRecord {
            id: "rec-9".to_string(),
            record_type: "A".to_string(),
            name: "www.example.com".to_string(),
            content: "198.51.100.7".to_string(),
            ttl: Some(1),
            priority: None,
            proxied: true,
            ..Default::default()
        };

        apply_remote(&mut data, &remote, "zone-1");

        assert_eq!(data.id, "rec-9");
        assert_eq!(data.subdomain, "www");
        assert_eq!(data.value, "198.51.100.7");
        assert_eq!(data.ttl, Some(1));
        assert_eq!(data.proxied, Some(true));
        assert_eq!(data.zone_id.as_deref(), Some("zone-1"));
        assert_eq!(data.domain, "example.com");
    }

    #[test]
    fn test_apply_remote_apex() {
        let mut data = RecordData::new("example.com", "TXT", "old");
        let remote = DnsRecord {
            id: "rec-2".to_string(),
            record_type: "TXT".to_string(),
            name: "example.com".to_string(),
            content: "new".to_string(),
            ..Default::default()
        };

        apply_remote(&mut data, &remote, "zone-1");
        assert_eq!(data.subdomain, "");
        assert_eq!(data.value, "new");
    }
}
