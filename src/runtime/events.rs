//! Controller event stream payloads.
//!
//! The original notification surface (toasts, button mutation, the forced
//! page reload) re-expressed as typed events for the embedder to render.

use crate::{
    backup::BackupRecord,
    core::view::ControlState,
    types::{CommandKind, JobId, JobStatus, SnapshotSeq},
};

/// Events emitted from the controller loop.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A fresh operation-log snapshot was accepted into the cache.
    SnapshotApplied {
        /// Applied snapshot sequence.
        seq: SnapshotSeq,
    },
    /// Derived undo/redo button state after a poll or busy transition.
    ControlsChanged {
        /// Current control state, busy overlay included.
        controls: ControlState,
    },
    /// An undo/redo command succeeded.
    CommandAccepted {
        /// Which command ran.
        kind: CommandKind,
        /// Server-supplied confirmation text, when present.
        message: Option<String>,
    },
    /// An undo/redo command failed.
    CommandRejected {
        /// Which command failed.
        kind: CommandKind,
        /// User-facing error text.
        message: String,
    },
    /// Fired once, a fixed delay after a successful command, for embedders
    /// that keep the full-view-reload behavior.
    ReloadRequested,
    /// A watched backup job reached a terminal status.
    JobFinished {
        /// Watched job id.
        job: JobId,
        /// Terminal status (`done` or `failed`).
        status: JobStatus,
    },
    /// A watched backup job exhausted its attempt budget without reaching
    /// a terminal status.
    JobExpired {
        /// Watched job id.
        job: JobId,
    },
    /// The backup history list was re-fetched.
    BackupListRefreshed {
        /// Current history rows.
        backups: Vec<BackupRecord>,
    },
}
