//! Contract Test: Import
//!
//! Constraints verified:
//! - Identifiers without exactly three `|` tokens fail before any remote call
//! - Zero or several matching records fail the import
//! - A unique match seeds id and domain, then the record is read

mod common;

use common::*;
use dnsrec_core::error::Error;
use dnsrec_core::{delete_record, import_record};

#[tokio::test]
async fn malformed_identifier_makes_no_remote_call() {
    let api = MockDnsApi::new();

    for bad in ["a|b", "a|b|c|d", "www.example.com"] {
        let err = import_record(&api, bad).await.unwrap_err();
        assert!(matches!(err, Error::ImportFormat(_)), "{bad}: {err}");
    }

    assert_eq!(api.total_calls(), 0);
}

#[tokio::test]
async fn import_without_match_fails() {
    let api = MockDnsApi::new();
    api.insert_simple("www.example.com", "AAAA", "2001:db8::1");

    let err = import_record(&api, "www|example.com|A").await.unwrap_err();

    assert!(matches!(err, Error::ImportAmbiguous { count: 0, .. }), "{err}");
    assert_eq!(api.calls(Op::Read), 0);
}

#[tokio::test]
async fn import_with_several_matches_fails() {
    let api = MockDnsApi::new();
    api.insert_simple("www.example.com", "A", "192.0.2.1");
    api.insert_simple("www.example.com", "A", "192.0.2.2");

    let err = import_record(&api, "www|example.com|A").await.unwrap_err();

    assert!(matches!(err, Error::ImportAmbiguous { count: 2, .. }), "{err}");
}

#[tokio::test]
async fn import_unique_match_populates_state() {
    let api = MockDnsApi::new();
    let id = api.insert_simple("www.example.com", "A", "192.0.2.1");
    api.insert_simple("api.example.com", "A", "192.0.2.2");

    let data = import_record(&api, "www|example.com|A").await.unwrap();

    assert_eq!(data.id, id);
    assert_eq!(data.domain, "example.com");
    assert_eq!(data.subdomain, "www");
    assert_eq!(data.record_type, "A");
    assert_eq!(data.value, "192.0.2.1");
    assert_eq!(data.ttl, Some(1));
    assert_eq!(data.zone_id.as_deref(), Some(ZONE_ID));
    assert_eq!(api.calls(Op::List), 1);
    assert_eq!(api.calls(Op::Read), 1);
}

#[tokio::test]
async fn import_apex_record() {
    let api = MockDnsApi::new();
    let id = api.insert_simple("example.com", "TXT", "v=spf1 -all");

    let data = import_record(&api, "|example.com|TXT").await.unwrap();

    assert_eq!(data.id, id);
    assert_eq!(data.subdomain, "");
}

#[tokio::test]
async fn import_in_unknown_zone_fails() {
    let api = MockDnsApi::new();

    let err = import_record(&api, "www|example.org|A").await.unwrap_err();

    assert!(matches!(err, Error::ZoneNotFound(_)));
    assert_eq!(api.calls(Op::List), 0);
}

#[tokio::test]
async fn imported_record_can_be_managed() {
    let api = MockDnsApi::new();
    api.insert_simple("mail.example.com", "MX", "mx1.example.net");

    let mut data = import_record(&api, "mail|example.com|MX").await.unwrap();
    delete_record(&api, &mut data).await.unwrap();

    assert!(!data.is_present());
    assert_eq!(api.record_count(), 0);
}

#[tokio::test]
async fn import_of_record_vanishing_before_read_fails() {
    let api = MockDnsApi::new();
    let id = api.insert_simple("www.example.com", "A", "192.0.2.1");

    // The listing still sees the record, the read no longer does
    api.fail(Op::Read, || Error::record_not_found("rec-1"));
    let err = import_record(&api, "www|example.com|A").await.unwrap_err();

    assert!(matches!(err, Error::RecordNotFound { id: ref missing } if *missing == id), "{err}");
    assert_eq!(api.calls(Op::List), 1);
    assert_eq!(api.calls(Op::Read), 1);
}

#[tokio::test]
async fn import_surfaces_list_failure() {
    let api = MockDnsApi::new();
    api.insert_simple("www.example.com", "A", "192.0.2.1");

    api.fail(Op::List, || Error::rate_limited("429"));
    let err = import_record(&api, "www|example.com|A").await.unwrap_err();

    assert!(matches!(err, Error::RateLimited(_)));
    assert_eq!(api.calls(Op::Read), 0);
}
