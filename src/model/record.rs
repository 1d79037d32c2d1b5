use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A DNS resource record as the provider returns it. Fields this client
/// doesn't interpret (ttl, priority, port, weight, ...) ride along in
/// `extra` so nothing is lost on a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `(type, name, data)` triple identifying a logical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey<'a> {
    pub record_type: &'a str,
    pub name: &'a str,
    pub data: &'a str,
}

impl Record {
    pub fn key(&self) -> RecordKey<'_> {
        RecordKey {
            record_type: &self.record_type,
            name: &self.name,
            data: &self.data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordCollection {
    #[serde(default)]
    pub domain_records: Vec<Record>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
