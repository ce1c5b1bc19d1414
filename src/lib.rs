//! Client-side coordinator for a lexicon curation server's reversible
//! operation log and asynchronous backup jobs.
//!
//! The server owns the data model, validation, and persistence; this crate
//! polls the operation log, derives undo/redo control state from it, issues
//! undo/redo commands, and supervises status watchers for long-running
//! backup jobs.
//!
//! # Examples
//!
//! Pure derivation with [`core::view::OpLogView`]:
//! ```
//! use chrono::Utc;
//! use lexlog::{
//!     core::view::OpLogView,
//!     op::{LogSnapshot, OpKind, Operation},
//!     types::OpStatus,
//! };
//!
//! let mut view = OpLogView::new();
//! let applied = view.apply(LogSnapshot {
//!     seq: 1,
//!     operations: vec![Operation {
//!         kind: OpKind::CreateEntry,
//!         entry_id: Some("lex-42".to_string()),
//!         timestamp: Utc::now(),
//!         status: OpStatus::Completed,
//!         data: serde_json::Value::Null,
//!     }],
//! });
//! assert!(applied);
//!
//! let controls = view.controls();
//! assert!(controls.undo.enabled);
//! assert_eq!(controls.undo.title, "Created entry lex-42");
//! assert!(!controls.redo.enabled);
//! ```
//!
//! Runtime usage against a live server:
//! ```no_run
//! use lexlog::{
//!     api::http::HttpBackupApi,
//!     core::view::OpLogView,
//!     runtime::handle::{RuntimeConfig, spawn_controller},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let api = HttpBackupApi::new("http://localhost:5000", None);
//! let handle = spawn_controller(OpLogView::new(), Box::new(api), RuntimeConfig::default());
//!
//! let controls = handle.controls().await.expect("controls");
//! if controls.undo.enabled {
//!     let _ = handle.undo().await;
//! }
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![deny(missing_docs)]

/// Transport contract and HTTP implementation.
pub mod api;
/// Backup-manager wire records.
pub mod backup;
/// Cached operation-log view and control derivation.
pub mod core;
/// Operation wire model and snapshots.
pub mod op;
/// Single-writer controller runtime and event stream.
pub mod runtime;
/// Shared id aliases and status vocabularies.
pub mod types;
