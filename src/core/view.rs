use crate::{
    op::{LogSnapshot, Operation},
    types::{CommandKind, OpStatus, SnapshotSeq},
};

/// Tooltip shown when nothing can be undone.
pub const DEFAULT_UNDO_TITLE: &str = "Undo last operation";
/// Tooltip shown when nothing can be redone.
pub const DEFAULT_REDO_TITLE: &str = "Redo last undone operation";
/// Most recent operations shown in the history dropdown.
pub const HISTORY_LIMIT: usize = 10;

/// Derived presentation state for one history button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    /// Whether the button accepts clicks.
    pub enabled: bool,
    /// Button label.
    pub label: String,
    /// Tooltip text.
    pub title: String,
}

/// Derived presentation state for the undo/redo pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    /// Undo button.
    pub undo: ButtonState,
    /// Redo button.
    pub redo: ButtonState,
}

impl ControlState {
    /// Overlays the in-flight command onto the derived state: the busy
    /// button is disabled and its label swapped for a progress indicator.
    pub fn mark_busy(&mut self, kind: CommandKind) {
        let (button, label) = match kind {
            CommandKind::Undo => (&mut self.undo, "Undoing..."),
            CommandKind::Redo => (&mut self.redo, "Redoing..."),
        };
        button.enabled = false;
        button.label = label.to_string();
    }
}

/// Client-side cache of the server operation log.
///
/// Rebuilt wholesale from each accepted snapshot; the undo/redo stacks are
/// views over the log's status partitioning, not independently stored
/// structures. Snapshots carry a monotonic sequence so responses that
/// arrive out of order are discarded instead of clobbering newer state.
#[derive(Debug, Default)]
pub struct OpLogView {
    operations: Vec<Operation>,
    last_seq: Option<SnapshotSeq>,
}

impl OpLogView {
    /// Creates an empty view with no applied snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a fetched snapshot, rejecting stale sequences.
    ///
    /// Returns false and leaves the cache untouched when `snapshot.seq` is
    /// not strictly greater than the last applied sequence.
    pub fn apply(&mut self, snapshot: LogSnapshot) -> bool {
        if self.last_seq.is_some_and(|seq| snapshot.seq <= seq) {
            return false;
        }
        self.last_seq = Some(snapshot.seq);
        self.operations = snapshot.operations;
        true
    }

    /// Sequence of the last accepted snapshot, if any.
    pub fn last_seq(&self) -> Option<SnapshotSeq> {
        self.last_seq
    }

    /// Cached operations in server log order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// All `completed` operations in log order.
    pub fn undo_stack(&self) -> Vec<&Operation> {
        self.with_status(OpStatus::Completed)
    }

    /// All `undone` operations in log order.
    pub fn redo_stack(&self) -> Vec<&Operation> {
        self.with_status(OpStatus::Undone)
    }

    /// Derives button state from the cached log.
    ///
    /// Each button is enabled iff its stack is non-empty, and its tooltip
    /// describes the stack's most recent operation.
    pub fn controls(&self) -> ControlState {
        ControlState {
            undo: button(self.top(OpStatus::Completed), "Undo", DEFAULT_UNDO_TITLE),
            redo: button(self.top(OpStatus::Undone), "Redo", DEFAULT_REDO_TITLE),
        }
    }

    /// Up to `limit` most recent operations, reverse-chronological.
    pub fn history(&self, limit: usize) -> Vec<&Operation> {
        self.operations.iter().rev().take(limit).collect()
    }

    /// Owned copy of [`OpLogView::history`].
    pub fn history_cloned(&self, limit: usize) -> Vec<Operation> {
        self.history(limit).into_iter().cloned().collect()
    }

    fn with_status(&self, status: OpStatus) -> Vec<&Operation> {
        self.operations
            .iter()
            .filter(|op| op.status == status)
            .collect()
    }

    fn top(&self, status: OpStatus) -> Option<&Operation> {
        self.operations.iter().rev().find(|op| op.status == status)
    }
}

fn button(top: Option<&Operation>, label: &str, default_title: &str) -> ButtonState {
    ButtonState {
        enabled: top.is_some(),
        label: label.to_string(),
        title: top
            .map(Operation::describe)
            .unwrap_or_else(|| default_title.to_string()),
    }
}
