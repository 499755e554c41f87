//! Pre-flight validation of record configuration
//!
//! Both checks run before any remote call; failures are
//! [`Error::Config`](crate::Error::Config).

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::{Error, Result};

/// Record types that may be routed through the provider's edge
const PROXIABLE_TYPES: &[&str] = &["A", "AAAA", "CNAME"];

/// Record types that are accepted but must not be proxied
const DIRECT_ONLY_TYPES: &[&str] = &["TXT", "SRV", "LOC", "MX", "NS", "SPF"];

/// Check record content against the syntax rules of its type.
///
/// Types without a rule are accepted as-is.
pub fn validate_record_content(record_type: &str, content: &str) -> Result<()> {
    match record_type {
        "A" => {
            if content.parse::<Ipv4Addr>().is_err() {
                return Err(Error::config(format!(
                    "A record must be a valid IPv4 address, got: {content:?}"
                )));
            }
        }
        "AAAA" => {
            if content.parse::<Ipv6Addr>().is_err() {
                return Err(Error::config(format!(
                    "AAAA record must be a valid IPv6 address, got: {content:?}"
                )));
            }
        }
        "TXT" => {
            if let Some(byte) = content.bytes().find(|b| !(0x20..=0x7F).contains(b)) {
                return Err(Error::config(format!(
                    "TXT records must contain printable ASCII, found: {:?}",
                    char::from(byte)
                )));
            }
        }
        _ => {}
    }
    Ok(())
}

/// Check that the record type is known and compatible with the proxied flag.
pub fn validate_record_type(record_type: &str, proxied: bool) -> Result<()> {
    if PROXIABLE_TYPES.contains(&record_type) {
        return Ok(());
    }

    if DIRECT_ONLY_TYPES.contains(&record_type) {
        if proxied {
            return Err(Error::config(format!(
                "Type {record_type:?} cannot be proxied"
            )));
        }
        return Ok(());
    }

    Err(Error::config(format!(
        "Invalid type {record_type:?}. Valid types are \"A\", \"AAAA\", \"CNAME\", \
         \"TXT\", \"SRV\", \"LOC\", \"MX\", \"NS\" or \"SPF\""
    )))
}
