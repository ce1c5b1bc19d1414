use chrono::{TimeZone, Utc};

use lexlog::{
    core::view::{DEFAULT_REDO_TITLE, DEFAULT_UNDO_TITLE, HISTORY_LIMIT, OpLogView},
    op::{LogSnapshot, OpKind, Operation},
    types::OpStatus,
};

fn op(kind: OpKind, entry: Option<&str>, status: OpStatus, ts: i64) -> Operation {
    Operation {
        kind,
        entry_id: entry.map(str::to_string),
        timestamp: Utc.timestamp_opt(ts, 0).unwrap(),
        status,
        data: serde_json::Value::Null,
    }
}

fn view_with(seq: u64, operations: Vec<Operation>) -> OpLogView {
    let mut view = OpLogView::new();
    assert!(view.apply(LogSnapshot { seq, operations }));
    view
}

#[test]
fn mixed_statuses_enable_both_buttons_with_top_descriptions() {
    let view = view_with(
        1,
        vec![
            op(OpKind::CreateEntry, Some("e1"), OpStatus::Completed, 1),
            op(OpKind::UpdateEntry, Some("e2"), OpStatus::Undone, 2),
            op(OpKind::DeleteEntry, Some("e3"), OpStatus::Completed, 3),
        ],
    );

    let controls = view.controls();
    assert!(controls.undo.enabled);
    assert_eq!(controls.undo.title, "Deleted entry e3");
    assert!(controls.redo.enabled);
    assert_eq!(controls.redo.title, "Updated entry e2");
}

#[test]
fn empty_log_disables_both_buttons_with_default_titles() {
    let view = view_with(1, vec![]);

    let controls = view.controls();
    assert!(!controls.undo.enabled);
    assert_eq!(controls.undo.title, DEFAULT_UNDO_TITLE);
    assert!(!controls.redo.enabled);
    assert_eq!(controls.redo.title, DEFAULT_REDO_TITLE);
    assert_eq!(controls.undo.label, "Undo");
    assert_eq!(controls.redo.label, "Redo");
}

#[test]
fn failed_operations_belong_to_neither_stack() {
    let view = view_with(
        1,
        vec![
            op(OpKind::MergeEntries, None, OpStatus::Failed, 1),
            op(OpKind::SplitEntry, Some("e9"), OpStatus::Failed, 2),
        ],
    );

    assert!(view.undo_stack().is_empty());
    assert!(view.redo_stack().is_empty());
    assert!(!view.controls().undo.enabled);
    assert!(!view.controls().redo.enabled);
}

#[test]
fn unknown_kind_describes_with_raw_tag() {
    let view = view_with(
        1,
        vec![op(
            OpKind::Other("compact_lexicon".to_string()),
            None,
            OpStatus::Completed,
            1,
        )],
    );

    assert_eq!(view.controls().undo.title, "Operation: compact_lexicon");
}

#[test]
fn reapplying_an_unchanged_log_is_idempotent() {
    let operations = vec![
        op(OpKind::CreateEntry, Some("e1"), OpStatus::Completed, 1),
        op(OpKind::UpdateEntry, Some("e2"), OpStatus::Undone, 2),
    ];

    let mut view = view_with(1, operations.clone());
    let before = view.controls();

    assert!(view.apply(LogSnapshot {
        seq: 2,
        operations,
    }));
    assert_eq!(view.controls(), before);
}

#[test]
fn stale_snapshots_are_rejected_without_touching_the_cache() {
    let mut view = view_with(
        5,
        vec![op(OpKind::CreateEntry, Some("e1"), OpStatus::Completed, 1)],
    );

    let stale = LogSnapshot {
        seq: 5,
        operations: vec![],
    };
    assert!(!view.apply(stale));

    let older = LogSnapshot {
        seq: 3,
        operations: vec![],
    };
    assert!(!view.apply(older));

    assert_eq!(view.last_seq(), Some(5));
    assert_eq!(view.operations().len(), 1);
    assert!(view.controls().undo.enabled);
}

#[test]
fn history_is_reverse_chronological_and_capped() {
    let operations: Vec<Operation> = (0..15)
        .map(|i| {
            let id = format!("e{i}");
            op(OpKind::UpdateEntry, Some(id.as_str()), OpStatus::Completed, i)
        })
        .collect();
    let view = view_with(1, operations);

    let history = view.history(HISTORY_LIMIT);
    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(history[0].entry_id.as_deref(), Some("e14"));
    assert_eq!(history[9].entry_id.as_deref(), Some("e5"));
}

#[test]
fn entryless_operations_describe_without_an_id() {
    let merge = op(OpKind::MergeEntries, None, OpStatus::Completed, 1);
    assert_eq!(merge.describe(), "Merged entries");

    let create = op(OpKind::CreateEntry, None, OpStatus::Completed, 2);
    assert_eq!(create.describe(), "Created entry");
}
