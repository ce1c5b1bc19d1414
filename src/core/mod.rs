//! Cached operation-log view and control-state derivation.

/// Snapshot cache and pure derivation over it.
pub mod view;
