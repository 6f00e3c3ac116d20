//! Lifecycle policy: pure decisions over a status/spec snapshot.
//!
//! Each function takes the snapshot by reference plus, where time matters, a
//! caller-supplied reference time (`None` stands for "unset"). Absent inputs
//! are valid and always resolve to the outcome that avoids restarts.

pub mod classify;
pub mod freshness;
pub mod restart;
pub mod update;

pub use classify::{is_active, is_failed, is_pending, is_stopped, is_terminated};
pub use freshness::is_savepoint_up_to_date;
pub use restart::should_restart;
pub use update::update_ready;
