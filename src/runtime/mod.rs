//! Single-writer async controller and its event stream.

/// Event stream types emitted by the controller.
pub mod events;
/// Handle and command loop implementation.
pub mod handle;
