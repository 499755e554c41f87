//! Declarative schema of the record resource
//!
//! Describes the recognised configuration fields so a host can validate and
//! plan changes without knowing [`RecordData`]'s layout.

use serde::Serialize;
use serde_json::Value;

use crate::resource::RecordData;

/// Version of the persisted state layout
pub const SCHEMA_VERSION: u32 = 1;

/// Value kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Int,
    Bool,
}

/// Descriptor of one configuration field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Must be set by the user
    pub required: bool,
    /// May be set by the user
    pub optional: bool,
    /// Filled in by the provider when not set
    pub computed: bool,
    /// Changing the value requires destroying and recreating the record
    pub force_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<&'static str>,
}

impl FieldSchema {
    fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            optional: false,
            computed: false,
            force_new: false,
            default: None,
            deprecated: None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    fn deprecated(mut self, message: &'static str) -> Self {
        self.deprecated = Some(message);
        self
    }
}

/// Fields of the record resource
pub fn record_schema() -> Vec<FieldSchema> {
    vec![
        FieldSchema::new("domain", FieldKind::String).required().force_new(),
        FieldSchema::new("subdomain", FieldKind::String)
            .optional()
            .with_default(Value::from("")),
        FieldSchema::new("name", FieldKind::String)
            .optional()
            .deprecated("Please use 'subdomain' instead"),
        FieldSchema::new("type", FieldKind::String).required().force_new(),
        FieldSchema::new("value", FieldKind::String).required(),
        FieldSchema::new("ttl", FieldKind::Int).optional().computed(),
        FieldSchema::new("priority", FieldKind::Int).optional(),
        FieldSchema::new("proxied", FieldKind::Bool)
            .optional()
            .with_default(Value::from(false)),
        FieldSchema::new("zone_id", FieldKind::String).computed(),
    ]
}

/// Whether moving from `old` to `new` touches a force-new field.
///
/// Such a change cannot be applied with an update; the record must be
/// deleted and created again.
pub fn requires_replacement(old: &RecordData, new: &RecordData) -> bool {
    record_schema()
        .iter()
        .filter(|field| field.force_new)
        .any(|field| match field.name {
            "domain" => old.domain != new.domain,
            "type" => old.record_type != new.record_type,
            _ => false,
        })
}
