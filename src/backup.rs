//! Backup-manager wire records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::BackupId;

/// One row of the backup history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupRecord {
    /// Stable backup identifier.
    pub id: BackupId,
    /// When the archive was created.
    pub created_at: DateTime<Utc>,
    /// Archive size in bytes, when the server reports it.
    #[serde(default)]
    pub size_bytes: Option<u64>,
    /// Free-form comment attached at creation time.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Payload for requesting a new backup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BackupRequest {
    /// Caller-chosen identifier; the server assigns one when absent.
    #[serde(default)]
    pub id: Option<BackupId>,
    /// Free-form comment to store with the archive.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Result of asking the server whether a caller-chosen id is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCheck {
    /// True when the id may be used for a new backup.
    pub valid: bool,
    /// Rejection reason, when invalid.
    #[serde(default)]
    pub reason: Option<String>,
}

/// One row of the scheduled-backup listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledBackup {
    /// Schedule name.
    pub name: String,
    /// Next planned run.
    pub next_run: DateTime<Utc>,
    /// Whether the schedule is active.
    pub enabled: bool,
}

/// Body of a successful undo/redo command.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandOutcome {
    /// Optional server-supplied confirmation text.
    #[serde(default)]
    pub message: Option<String>,
}
