use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::common::ContactId;

/// Free-form contact payload. The HTTP layer never looks inside it.
pub type ContactFields = Map<String, Value>;

/// What a store hands back for a contact. Its shape, id format included,
/// is up to the store; handlers only serialize it.
pub type ContactRecord = Value;

/// Keys owned by the store. Client-supplied values for these are dropped.
pub const RESERVED_KEYS: [&str; 3] = ["id", "created_at", "updated_at"];

/// A contact as the bundled stores keep it.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub fields: ContactFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Build a freshly created contact with a new id.
    pub fn new(fields: ContactFields) -> Self {
        let now = Utc::now();
        Self {
            id: ContactId::new(),
            fields: without_reserved_keys(fields),
            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow-merge `changes` into this contact's fields.
    ///
    /// Top-level keys in `changes` replace existing ones; keys not mentioned
    /// are left alone.
    pub fn apply(&mut self, changes: ContactFields) {
        for (key, value) in without_reserved_keys(changes) {
            self.fields.insert(key, value);
        }
        self.updated_at = Utc::now();
    }

    /// Flatten into `{"id": ..., <fields>, "created_at": ..., "updated_at": ...}`.
    pub fn into_record(self) -> ContactRecord {
        let mut record = self.fields;
        record.insert("id".to_string(), Value::String(self.id.to_string()));
        record.insert("created_at".to_string(), timestamp(self.created_at));
        record.insert("updated_at".to_string(), timestamp(self.updated_at));
        Value::Object(record)
    }
}

// Postgres keeps microseconds, so both stores render at that precision.
fn timestamp(at: DateTime<Utc>) -> Value {
    Value::String(at.to_rfc3339_opts(SecondsFormat::Micros, true))
}

/// Remove store-owned keys from a client payload.
pub fn without_reserved_keys(mut fields: ContactFields) -> ContactFields {
    for key in RESERVED_KEYS {
        fields.remove(key);
    }
    fields
}
