//! Test doubles and common utilities for lifecycle contract tests
//!
//! [`MockDnsApi`] keeps zones and records in memory, counts every call and
//! can be told to fail a given operation.

#![allow(dead_code)]

use dnsrec_core::error::{Error, Result};
use dnsrec_core::record::{DnsRecord, RecordFilter};
use dnsrec_core::traits::DnsApi;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub const ZONE_NAME: &str = "example.com";
pub const ZONE_ID: &str = "zone-example";

/// Remote operations of [`DnsApi`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ZoneLookup,
    Create,
    Read,
    List,
    Update,
    Delete,
}

/// An in-memory DnsApi that tracks calls
pub struct MockDnsApi {
    zones: HashMap<String, String>,
    records: Mutex<HashMap<String, DnsRecord>>,
    next_id: AtomicUsize,
    calls: Mutex<HashMap<Op, usize>>,
    failures: Mutex<HashMap<Op, fn() -> Error>>,
    /// Return an empty record from create, as a misbehaving provider would
    empty_create_response: AtomicBool,
    last_create: Mutex<Option<DnsRecord>>,
    last_update: Mutex<Option<DnsRecord>>,
}

impl MockDnsApi {
    /// A provider hosting the `example.com` zone
    pub fn new() -> Self {
        let mut zones = HashMap::new();
        zones.insert(ZONE_NAME.to_string(), ZONE_ID.to_string());

        Self {
            zones,
            records: Mutex::new(HashMap::new()),
            next_id: AtomicUsize::new(1),
            calls: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashMap::new()),
            empty_create_response: AtomicBool::new(false),
            last_create: Mutex::new(None),
            last_update: Mutex::new(None),
        }
    }

    /// Seed a remote record; returns its id
    pub fn insert(&self, mut record: DnsRecord) -> String {
        if record.id.is_empty() {
            record.id = self.allocate_id();
        }
        record.zone_id.get_or_insert_with(|| ZONE_ID.to_string());
        let id = record.id.clone();
        self.records.lock().unwrap().insert(id.clone(), record);
        id
    }

    /// Seed a remote record from its parts; returns its id
    pub fn insert_simple(&self, name: &str, record_type: &str, content: &str) -> String {
        self.insert(DnsRecord {
            record_type: record_type.to_string(),
            name: name.to_string(),
            content: content.to_string(),
            ttl: Some(1),
            ..Default::default()
        })
    }

    /// Remove a record behind the resource's back
    pub fn remove(&self, id: &str) {
        self.records.lock().unwrap().remove(id);
    }

    /// Get a stored record
    pub fn record(&self, id: &str) -> Option<DnsRecord> {
        self.records.lock().unwrap().get(id).cloned()
    }

    /// Number of stored records
    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Make every call to `op` fail with the given error
    pub fn fail(&self, op: Op, error: fn() -> Error) {
        self.failures.lock().unwrap().insert(op, error);
    }

    /// Make create report success with an empty record
    pub fn return_empty_create_response(&self) {
        self.empty_create_response.store(true, Ordering::SeqCst);
    }

    /// Number of calls made to `op`
    pub fn calls(&self, op: Op) -> usize {
        self.calls.lock().unwrap().get(&op).copied().unwrap_or(0)
    }

    /// Total number of remote calls
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    /// Payload of the most recent create call
    pub fn last_create(&self) -> Option<DnsRecord> {
        self.last_create.lock().unwrap().clone()
    }

    /// Payload of the most recent update call
    pub fn last_update(&self) -> Option<DnsRecord> {
        self.last_update.lock().unwrap().clone()
    }

    fn allocate_id(&self) -> String {
        format!("rec-{}", self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn enter(&self, op: Op) -> Result<()> {
        *self.calls.lock().unwrap().entry(op).or_insert(0) += 1;
        match self.failures.lock().unwrap().get(&op) {
            Some(make_error) => Err(make_error()),
            None => Ok(()),
        }
    }

    /// Apply provider-side defaults the way the real API does
    fn stored(record: &DnsRecord, id: String, zone_id: &str) -> DnsRecord {
        DnsRecord {
            id,
            ttl: record.ttl.or(Some(1)),
            zone_id: Some(zone_id.to_string()),
            ..record.clone()
        }
    }
}

#[async_trait::async_trait]
impl DnsApi for MockDnsApi {
    async fn zone_id_by_name(&self, zone_name: &str) -> Result<String> {
        self.enter(Op::ZoneLookup)?;
        self.zones
            .get(zone_name)
            .cloned()
            .ok_or_else(|| Error::zone_not_found(zone_name))
    }

    async fn create_dns_record(&self, zone_id: &str, record: &DnsRecord) -> Result<DnsRecord> {
        self.enter(Op::Create)?;
        *self.last_create.lock().unwrap() = Some(record.clone());

        if self.empty_create_response.load(Ordering::SeqCst) {
            return Ok(DnsRecord::default());
        }

        let stored = Self::stored(record, self.allocate_id(), zone_id);
        self.records
            .lock()
            .unwrap()
            .insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn dns_record(&self, _zone_id: &str, record_id: &str) -> Result<DnsRecord> {
        self.enter(Op::Read)?;
        self.record(record_id)
            .ok_or_else(|| Error::record_not_found(record_id))
    }

    async fn dns_records(&self, _zone_id: &str, filter: &RecordFilter) -> Result<Vec<DnsRecord>> {
        self.enter(Op::List)?;
        let mut matching: Vec<DnsRecord> = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matching)
    }

    async fn update_dns_record(
        &self,
        zone_id: &str,
        record_id: &str,
        record: &DnsRecord,
    ) -> Result<()> {
        self.enter(Op::Update)?;
        *self.last_update.lock().unwrap() = Some(record.clone());

        let mut records = self.records.lock().unwrap();
        if !records.contains_key(record_id) {
            return Err(Error::record_not_found(record_id));
        }
        records.insert(
            record_id.to_string(),
            Self::stored(record, record_id.to_string(), zone_id),
        );
        Ok(())
    }

    async fn delete_dns_record(&self, _zone_id: &str, record_id: &str) -> Result<()> {
        self.enter(Op::Delete)?;
        self.records
            .lock()
            .unwrap()
            .remove(record_id)
            .map(|_| ())
            .ok_or_else(|| Error::record_not_found(record_id))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
