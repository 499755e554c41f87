//! Core traits for dnsrec
//!
//! - [`DnsApi`]: remote DNS provider operations

pub mod dns_api;

pub use dns_api::{DnsApi, DnsApiFactory};
