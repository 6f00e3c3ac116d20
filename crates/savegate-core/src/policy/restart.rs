//! Restart eligibility for failed jobs.

use tracing::debug;

use crate::domain::{JobSpec, JobStatus};

use super::freshness::is_savepoint_up_to_date;

/// Should the controller restart this failed job from its savepoint?
///
/// Only a failed job whose spec opts into `FromSavepointOnFailure` and whose
/// savepoint was still fresh when the job completed qualifies. Without a
/// completion time only a final savepoint passes.
pub fn should_restart(status: Option<&JobStatus>, spec: Option<&JobSpec>) -> bool {
    let (Some(status), Some(spec)) = (status, spec) else {
        return false;
    };
    if !status.state.is_failed() {
        return false;
    }

    let policy_allows = spec.restarts_from_savepoint_on_failure();
    let restart = policy_allows && is_savepoint_up_to_date(status, spec, status.completion_time);
    debug!(
        state = ?status.state,
        policy = ?spec.restart_policy(),
        final_savepoint = status.final_savepoint,
        restart,
        "evaluated restart eligibility"
    );
    restart
}
