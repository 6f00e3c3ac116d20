//! Readiness of a pending spec update.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{JobSpec, JobState, JobStatus};

use super::freshness::is_savepoint_up_to_date;

/// May the pending spec update be applied now?
///
/// Branches are checked in order; the first match decides:
/// 1. no status: nothing to preserve
/// 2. the user supplied `from_savepoint`
/// 3. active job: a final savepoint when `take_savepoint_on_update`,
///    otherwise a savepoint fresh at `observe_time`
/// 4. `Updating` without `take_savepoint_on_update`
/// 5. anything else: a savepoint fresh at the completion time
///
/// `Updating` with `take_savepoint_on_update` reaches branch 5, where the
/// completion time is usually unset, so it waits for a final savepoint.
/// An absent spec behaves like the default spec.
pub fn update_ready(
    status: Option<&JobStatus>,
    spec: Option<&JobSpec>,
    observe_time: Option<DateTime<Utc>>,
) -> bool {
    let default_spec = JobSpec::default();
    let spec = spec.unwrap_or(&default_spec);

    let (ready, branch) = match status {
        None => (true, "no status"),
        Some(_) if spec.has_explicit_from_savepoint() => (true, "explicit fromSavepoint"),
        Some(status) if status.state.is_active() => {
            if spec.takes_savepoint_on_update() {
                (status.final_savepoint, "active, waiting for final savepoint")
            } else {
                (
                    is_savepoint_up_to_date(status, spec, observe_time),
                    "active, savepoint fresh at observe time",
                )
            }
        }
        Some(status)
            if status.state == JobState::Updating && !spec.takes_savepoint_on_update() =>
        {
            (true, "updating without savepoint")
        }
        Some(status) => (
            is_savepoint_up_to_date(status, spec, status.completion_time),
            "savepoint fresh at completion",
        ),
    };

    let state = status.map(|s| s.state);
    debug!(
        ?state,
        ready,
        branch,
        "evaluated update readiness"
    );
    ready
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    fn taken_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn absent_status_is_ready() {
        assert!(update_ready(None, None, None));
        assert!(update_ready(None, Some(&JobSpec::default()), Some(taken_at())));
    }

    #[rstest]
    #[case::running(JobState::Running)]
    #[case::updating(JobState::Updating)]
    #[case::failed(JobState::Failed)]
    fn explicit_from_savepoint_is_ready(#[case] state: JobState) {
        let status = JobStatus::new(state);
        let spec = JobSpec::default().with_from_savepoint("s3://bucket/user-chosen");
        assert!(update_ready(Some(&status), Some(&spec), None));
    }

    #[test]
    fn blank_from_savepoint_is_ignored() {
        let status = JobStatus::new(JobState::Running);
        let spec = JobSpec::default().with_from_savepoint("   ");
        assert!(!update_ready(Some(&status), Some(&spec), Some(taken_at())));
    }

    #[rstest]
    #[case::running(JobState::Running)]
    #[case::deploying(JobState::Deploying)]
    fn active_job_waits_for_final_savepoint(#[case] state: JobState) {
        let status = JobStatus::new(state).with_savepoint("s3://x", taken_at());
        let spec = JobSpec::default().with_max_state_age(3600);
        let now = Some(taken_at() + Duration::seconds(1));
        assert!(!update_ready(Some(&status), Some(&spec), now));

        let status = status.with_final_savepoint(true);
        assert!(update_ready(Some(&status), Some(&spec), now));
    }

    #[rstest]
    #[case::fresh(59, true)]
    #[case::stale(60, false)]
    fn active_job_without_take_savepoint_checks_observe_time(
        #[case] observed_after_secs: i64,
        #[case] expected: bool,
    ) {
        let status = JobStatus::new(JobState::Running).with_savepoint("s3://x", taken_at());
        let spec = JobSpec::default()
            .with_take_savepoint_on_update(false)
            .with_max_state_age(60);
        let now = Some(taken_at() + Duration::seconds(observed_after_secs));
        assert_eq!(update_ready(Some(&status), Some(&spec), now), expected);
    }

    #[test]
    fn updating_without_take_savepoint_is_ready() {
        let status = JobStatus::new(JobState::Updating);
        let spec = JobSpec::default().with_take_savepoint_on_update(false);
        assert!(update_ready(Some(&status), Some(&spec), None));
    }

    // Updating with take_savepoint_on_update falls to the completion-time
    // check; with no completion time only a final savepoint lets it through.
    #[test]
    fn updating_with_take_savepoint_falls_through_to_completion_check() {
        let status = JobStatus::new(JobState::Updating).with_savepoint("s3://x", taken_at());
        let spec = JobSpec::default().with_max_state_age(3600);
        assert!(!update_ready(
            Some(&status),
            Some(&spec),
            Some(taken_at() + Duration::seconds(1))
        ));

        let status = status.with_final_savepoint(true);
        assert!(update_ready(Some(&status), Some(&spec), None));
    }

    #[rstest]
    #[case::fresh_at_completion(30, true)]
    #[case::stale_at_completion(120, false)]
    fn stopped_job_checks_completion_time(#[case] ran_for_secs: i64, #[case] expected: bool) {
        let status = JobStatus::new(JobState::Cancelled)
            .with_savepoint("s3://x", taken_at())
            .with_completion_time(taken_at() + Duration::seconds(ran_for_secs));
        let spec = JobSpec::default().with_max_state_age(60);
        // observe time is irrelevant for stopped jobs
        let much_later = Some(taken_at() + Duration::days(7));
        assert_eq!(update_ready(Some(&status), Some(&spec), much_later), expected);
    }

    #[rstest]
    #[case::pending(JobState::Pending)]
    #[case::restarting(JobState::Restarting)]
    #[case::failed(JobState::Failed)]
    #[case::unknown(JobState::Unknown)]
    fn without_usable_savepoint_is_not_ready(#[case] state: JobState) {
        let status = JobStatus::new(state);
        assert!(!update_ready(Some(&status), None, Some(taken_at())));
    }

    #[test]
    fn absent_spec_uses_defaults() {
        let status = JobStatus::new(JobState::Running);
        assert!(!update_ready(Some(&status), None, Some(taken_at())));

        let status = status
            .with_savepoint("s3://x", taken_at())
            .with_final_savepoint(true);
        assert!(update_ready(Some(&status), None, Some(taken_at())));
    }
}
