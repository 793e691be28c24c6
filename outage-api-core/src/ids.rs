//! Composite outage identifiers
//!
//! An outage id is encoded upstream as `chat_id:message_id:row_id`. When a
//! client dereferences a source, the id is split on `:` and only the first
//! two segments are used, with the order swapped to (chat id, message id)
//! lookup arguments. Segments are opaque strings; they are usually numeric
//! upstream but must never be assumed parseable as integers.

use thiserror::Error;

/// Minimum number of `:`-delimited segments in a well-formed outage id.
const MIN_SEGMENTS: usize = 3;

/// Raised when a client-supplied outage id has fewer than three segments.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid outage id '{0}': expected chat_id:message_id:row_id")]
pub struct InvalidOutageId(pub String);

/// Lookup key for the source message behind an outage record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceKey {
    pub chat_id: String,
    pub message_id: String,
}

impl SourceKey {
    /// Parse a composite outage id into a source lookup key.
    ///
    /// Segment 0 is the chat id and segment 1 the message id; the row id
    /// and any further segments are ignored.
    pub fn parse(raw: &str) -> Result<Self, InvalidOutageId> {
        let parts: Vec<&str> = raw.split(':').collect();
        if parts.len() < MIN_SEGMENTS {
            return Err(InvalidOutageId(raw.to_owned()));
        }

        Ok(Self {
            chat_id: parts[0].to_owned(),
            message_id: parts[1].to_owned(),
        })
    }
}
