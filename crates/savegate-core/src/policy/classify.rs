//! Classification of an optional job status.

use crate::domain::{JobSpec, JobStatus};

use super::restart::should_restart;

pub fn is_active(status: Option<&JobStatus>) -> bool {
    status.is_some_and(|s| s.state.is_active())
}

pub fn is_pending(status: Option<&JobStatus>) -> bool {
    status.is_some_and(|s| s.state.is_pending())
}

pub fn is_failed(status: Option<&JobStatus>) -> bool {
    status.is_some_and(|s| s.state.is_failed())
}

pub fn is_stopped(status: Option<&JobStatus>) -> bool {
    status.is_some_and(|s| s.state.is_stopped())
}

/// Stopped and will not be restarted automatically.
pub fn is_terminated(status: Option<&JobStatus>, spec: Option<&JobSpec>) -> bool {
    is_stopped(status) && !should_restart(status, spec)
}
