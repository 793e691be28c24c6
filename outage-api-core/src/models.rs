//! Domain records projected from the upstream ingestion tables.
//!
//! All records are read-only projections: this layer never creates or
//! mutates upstream state. Absent optional fields are omitted from JSON
//! rather than serialized as null.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One outage mention extracted from an ingested chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outage {
    /// Composite identifier `chat_id:message_id:row_id`, opaque to clients.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    pub event_start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_stop: Option<DateTime<Utc>>,
    pub address: Address,
}

/// Extracted address of an outage. Every field is independently optional:
/// absence means "not extracted", never an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_numbers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_ranges: Option<Vec<String>>,
}

/// The raw chat message backing an outage record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_message: Option<String>,
    pub source: SourceRef,
}

/// Locator for a source message: channel and message URLs plus sender
/// identity where the upstream row carries one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Always derived from the chat id, even when every other column is null.
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
}
