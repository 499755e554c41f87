//! Adoption of pre-existing records
//!
//! An import identifier has the form `subdomain|domain|type`, e.g.
//! `www|example.com|A`. An empty subdomain (`|example.com|TXT`) addresses
//! the zone apex.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use super::{RecordData, read_record};
use crate::error::{Error, Result};
use crate::record::{RecordFilter, record_name};
use crate::traits::DnsApi;

/// Parsed import identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportId {
    pub subdomain: String,
    pub domain: String,
    pub record_type: String,
}

impl ImportId {
    /// Fully-qualified name of the record to adopt
    pub fn full_name(&self) -> String {
        record_name(&self.subdomain, &self.domain)
    }
}

impl FromStr for ImportId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split('|').collect();
        let [subdomain, domain, record_type] = tokens.as_slice() else {
            return Err(Error::import_format(s));
        };

        Ok(Self {
            subdomain: subdomain.to_string(),
            domain: domain.to_string(),
            record_type: record_type.to_string(),
        })
    }
}

impl fmt::Display for ImportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.subdomain, self.domain, self.record_type)
    }
}

/// Adopt an existing remote record.
///
/// The identifier must resolve to exactly one record of the given name and
/// type. The returned data is populated by [`read_record`].
pub async fn import_record<A>(api: &A, import_id: &str) -> Result<RecordData>
where
    A: DnsApi + ?Sized,
{
    let id: ImportId = import_id.parse()?;
    let name = id.full_name();

    let zone_id = api.zone_id_by_name(&id.domain).await?;

    let filter = RecordFilter::by_name_and_type(name.clone(), id.record_type.clone());
    let records = api.dns_records(&zone_id, &filter).await?;

    let [record] = records.as_slice() else {
        return Err(Error::ImportAmbiguous {
            name,
            record_type: id.record_type,
            count: records.len(),
        });
    };

    let mut data = RecordData {
        id: record.id.clone(),
        domain: id.domain.clone(),
        ..Default::default()
    };

    read_record(api, &mut data).await?;

    // The record vanished between the listing and the read
    if !data.is_present() {
        return Err(Error::record_not_found(record.id.clone()));
    }

    info!(record_id = %data.id, import_id = %id, "Record imported");
    Ok(data)
}
