//! Is the recorded savepoint usable as a recovery point?

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::time::has_time_elapsed;
use crate::domain::{JobSpec, JobStatus};

/// Decide whether the recorded savepoint is recent enough to recover from.
///
/// A final savepoint is always up to date: nothing was processed after it.
/// Otherwise all three of `compare_time`, `max_state_age_to_restore_seconds`
/// and a recorded savepoint are required, and the savepoint must be strictly
/// younger than the max age at `compare_time`.
///
/// A savepoint time that does not parse is treated as stale.
pub fn is_savepoint_up_to_date(
    status: &JobStatus,
    spec: &JobSpec,
    compare_time: Option<DateTime<Utc>>,
) -> bool {
    if status.final_savepoint {
        return true;
    }
    let (Some(compare_time), Some(max_age)) =
        (compare_time, spec.max_state_age_to_restore_seconds)
    else {
        return false;
    };
    if !status.has_recorded_savepoint() {
        return false;
    }

    let taken_at = match status.parsed_savepoint_time() {
        Ok(Some(taken_at)) => taken_at,
        Ok(None) => return false,
        Err(err) => {
            warn!(
                savepoint_location = %status.savepoint_location,
                error = %err,
                "ignoring savepoint with unparseable time"
            );
            return false;
        }
    };

    let up_to_date = !has_time_elapsed(taken_at, compare_time, max_age);
    debug!(
        savepoint_location = %status.savepoint_location,
        %taken_at,
        %compare_time,
        max_age_secs = max_age,
        up_to_date,
        "evaluated savepoint freshness"
    );
    up_to_date
}
