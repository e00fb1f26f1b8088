use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::shared::domain::model::enums::evidence_error::EvidenceError;

const RESERVED_FIELDS: [&str; 4] = ["event_type", "correlation_id", "timestamp", "integrity_hash"];

/// Immutable, hash-sealed record of one governance action.
///
/// `integrity_hash` is the hex SHA-256 of the canonical JSON form of every
/// other field: object keys sorted, no whitespace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    event_type: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
    correlation_id: String,
    timestamp: String,
    integrity_hash: String,
}

impl AuditEvent {
    pub fn seal(
        event_type: impl Into<String>,
        fields: Map<String, Value>,
        correlation_id: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Result<Self, EvidenceError> {
        if let Some(reserved) = fields
            .keys()
            .find(|key| RESERVED_FIELDS.contains(&key.as_str()))
        {
            return Err(EvidenceError::ReservedField(reserved.clone()));
        }

        Ok(Self::assemble(
            event_type.into(),
            fields,
            correlation_id.into(),
            timestamp.into(),
        ))
    }

    pub(crate) fn assemble(
        event_type: String,
        fields: Map<String, Value>,
        correlation_id: String,
        timestamp: String,
    ) -> Self {
        let mut event = Self {
            event_type,
            fields,
            correlation_id,
            timestamp,
            integrity_hash: String::new(),
        };
        event.integrity_hash = event.compute_integrity_hash();
        event
    }

    pub fn compute_integrity_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_body().as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn verify_integrity(&self) -> bool {
        self.integrity_hash == self.compute_integrity_hash()
    }

    /// Canonical JSON of every field except `integrity_hash`.
    pub fn canonical_body(&self) -> String {
        let mut body = self.fields.clone();
        body.insert(
            "event_type".to_string(),
            Value::String(self.event_type.clone()),
        );
        body.insert(
            "correlation_id".to_string(),
            Value::String(self.correlation_id.clone()),
        );
        body.insert(
            "timestamp".to_string(),
            Value::String(self.timestamp.clone()),
        );

        canonicalize(Value::Object(body)).to_string()
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn integrity_hash(&self) -> &str {
        &self.integrity_hash
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

// Rebuilds every object with sorted keys so the encoding does not depend on
// the map implementation serde_json was compiled with.
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|(left, _), (right, _)| left.cmp(right));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, canonicalize(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
