//! Shared identifier aliases and the two status vocabularies.

use serde::{Deserialize, Serialize};

/// Identifier of a dictionary entry affected by an operation.
pub type EntryId = String;
/// Identifier of a stored backup archive.
pub type BackupId = String;
/// Identifier of an asynchronous backup job.
pub type JobId = String;
/// Monotonic client-side snapshot sequence number.
pub type SnapshotSeq = u64;

/// Operation-log entry status.
///
/// The operation log is server-owned with a closed vocabulary, so decoding
/// is strict: an unknown tag fails the snapshot decode instead of being
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpStatus {
    /// Applied and eligible for undo.
    Completed,
    /// Rolled back and eligible for redo.
    Undone,
    /// Application failed server-side.
    Failed,
}

/// Backup-job status, distinct from [`OpStatus`].
///
/// Jobs are observed through a separate status endpoint with an open
/// vocabulary; unrecognized tags are preserved verbatim and treated as
/// non-terminal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    /// Job finished successfully.
    Done,
    /// Job finished with an error.
    Failed,
    /// Job accepted but not finished.
    Pending,
    /// Any unrecognized status tag.
    Other(String),
}

impl JobStatus {
    /// True for `done` and `failed`; everything else keeps a poller going.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Failed)
    }
}

impl From<String> for JobStatus {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "done" => JobStatus::Done,
            "failed" => JobStatus::Failed,
            "pending" => JobStatus::Pending,
            _ => JobStatus::Other(tag),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Done => "done".to_string(),
            JobStatus::Failed => "failed".to_string(),
            JobStatus::Pending => "pending".to_string(),
            JobStatus::Other(tag) => tag,
        }
    }
}

/// Selector for the two reversible-history commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Undo the most recent completed operation.
    Undo,
    /// Redo the most recent undone operation.
    Redo,
}
