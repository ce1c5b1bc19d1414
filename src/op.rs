//! Operation wire model and client-stamped snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{EntryId, OpStatus, SnapshotSeq};

/// Tag identifying what a logged operation did.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OpKind {
    /// A dictionary entry was created.
    CreateEntry,
    /// A dictionary entry was edited.
    UpdateEntry,
    /// A dictionary entry was removed.
    DeleteEntry,
    /// Two or more entries were merged into one.
    MergeEntries,
    /// One entry was split into several.
    SplitEntry,
    /// Any other tag (backup jobs and future server-side kinds), preserved
    /// verbatim so it round-trips.
    Other(String),
}

impl OpKind {
    /// Wire tag for this kind.
    pub fn tag(&self) -> &str {
        match self {
            OpKind::CreateEntry => "create_entry",
            OpKind::UpdateEntry => "update_entry",
            OpKind::DeleteEntry => "delete_entry",
            OpKind::MergeEntries => "merge_entries",
            OpKind::SplitEntry => "split_entry",
            OpKind::Other(tag) => tag,
        }
    }
}

impl From<String> for OpKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "create_entry" => OpKind::CreateEntry,
            "update_entry" => OpKind::UpdateEntry,
            "delete_entry" => OpKind::DeleteEntry,
            "merge_entries" => OpKind::MergeEntries,
            "split_entry" => OpKind::SplitEntry,
            _ => OpKind::Other(tag),
        }
    }
}

impl From<OpKind> for String {
    fn from(kind: OpKind) -> Self {
        kind.tag().to_string()
    }
}

/// One entry of the server-maintained, append-only operation log.
///
/// The client never mutates these; it requests undo/redo transitions and
/// re-reads the resulting log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Action tag.
    #[serde(rename = "type")]
    pub kind: OpKind,
    /// Affected record, when the action targets a single entry.
    #[serde(default)]
    pub entry_id: Option<EntryId>,
    /// Creation time, RFC 3339 over the wire.
    pub timestamp: DateTime<Utc>,
    /// Log-vocabulary status.
    pub status: OpStatus,
    /// Opaque payload, not interpreted client-side.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Operation {
    /// Human sentence for tooltips and the history dropdown.
    pub fn describe(&self) -> String {
        let noun = match &self.kind {
            OpKind::CreateEntry => "Created entry",
            OpKind::UpdateEntry => "Updated entry",
            OpKind::DeleteEntry => "Deleted entry",
            OpKind::MergeEntries => "Merged entries",
            OpKind::SplitEntry => "Split entry",
            OpKind::Other(tag) => return format!("Operation: {tag}"),
        };
        match &self.entry_id {
            Some(id) => format!("{noun} {id}"),
            None => noun.to_string(),
        }
    }
}

/// One fetched copy of the operation log, stamped with the issuing
/// controller's sequence number so stale responses can be rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSnapshot {
    /// Client-side fetch sequence.
    pub seq: SnapshotSeq,
    /// Operations in server log order.
    pub operations: Vec<Operation>,
}
