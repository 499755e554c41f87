// # dnsrec-core
//
// Core library for managing a single DNS record declaratively.
//
// ## Architecture Overview
//
// - **DnsApi**: Trait for the remote provider operations (zone lookup, record CRUD)
// - **record**: Name composition, validation and local <-> remote field mapping
// - **resource**: The create/read/update/delete lifecycle and import
// - **schema**: Declarative description of the recognised fields
//
// ## Design Principles
//
// 1. **Explicit Dependencies**: The API handle is passed to every operation
// 2. **Structured Errors**: Absence is an error kind, not a message match
// 3. **Library-First**: No runtime, no process state; the host drives the lifecycle
// 4. **Idempotent Teardown**: Deleting an absent record succeeds

pub mod config;
pub mod error;
pub mod record;
pub mod resource;
pub mod schema;
pub mod traits;

// Re-export core types for convenience
pub use config::{Credentials, ProviderConfig};
pub use error::{Error, Result};
pub use record::{DnsRecord, RecordFilter};
pub use resource::{
    ImportId, RecordData, create_record, delete_record, import_record, read_record,
    update_record,
};
pub use schema::{FieldSchema, SCHEMA_VERSION, record_schema, requires_replacement};
pub use traits::{DnsApi, DnsApiFactory};
