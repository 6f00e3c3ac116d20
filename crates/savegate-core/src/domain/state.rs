//! Job lifecycle state as observed by the reconciler.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a job.
///
/// State transitions (driven by the reconciler, not by this crate):
/// - Pending -> Deploying -> Running -> Succeeded / Cancelled
/// - Deploying -> DeployFailed
/// - Running -> Failed / Lost -> Restarting -> Deploying (when restart is allowed)
/// - Running -> Updating -> Deploying (when update is ready)
///
/// Values written by a newer reconciler that we do not know yet land in
/// `Unknown`, which belongs to no category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobState {
    Pending,
    Deploying,
    Running,
    Updating,
    Restarting,
    Succeeded,
    Cancelled,
    Failed,
    Lost,
    DeployFailed,

    #[default]
    #[serde(other)]
    Unknown,
}

/// Mutually exclusive grouping of [`JobState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StateCategory {
    /// The job is (or is about to be) processing data.
    Active,

    /// Waiting on the reconciler: first deploy, update or restart in progress.
    Pending,

    /// Stopped because something went wrong.
    Failed,

    /// Stopped on purpose or after finishing its input.
    Finished,
}

impl JobState {
    pub const ALL: [JobState; 11] = [
        JobState::Pending,
        JobState::Deploying,
        JobState::Running,
        JobState::Updating,
        JobState::Restarting,
        JobState::Succeeded,
        JobState::Cancelled,
        JobState::Failed,
        JobState::Lost,
        JobState::DeployFailed,
        JobState::Unknown,
    ];

    /// Category of this state, `None` for [`JobState::Unknown`].
    pub fn category(self) -> Option<StateCategory> {
        match self {
            JobState::Running | JobState::Deploying => Some(StateCategory::Active),
            JobState::Pending | JobState::Updating | JobState::Restarting => {
                Some(StateCategory::Pending)
            }
            JobState::Failed | JobState::Lost | JobState::DeployFailed => {
                Some(StateCategory::Failed)
            }
            JobState::Succeeded | JobState::Cancelled => Some(StateCategory::Finished),
            JobState::Unknown => None,
        }
    }

    pub fn is_active(self) -> bool {
        self.category() == Some(StateCategory::Active)
    }

    pub fn is_pending(self) -> bool {
        self.category() == Some(StateCategory::Pending)
    }

    pub fn is_failed(self) -> bool {
        self.category() == Some(StateCategory::Failed)
    }

    /// Finished or failed: no job process is running.
    pub fn is_stopped(self) -> bool {
        matches!(
            self.category(),
            Some(StateCategory::Finished | StateCategory::Failed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::pending(JobState::Pending, Some(StateCategory::Pending))]
    #[case::deploying(JobState::Deploying, Some(StateCategory::Active))]
    #[case::running(JobState::Running, Some(StateCategory::Active))]
    #[case::updating(JobState::Updating, Some(StateCategory::Pending))]
    #[case::restarting(JobState::Restarting, Some(StateCategory::Pending))]
    #[case::succeeded(JobState::Succeeded, Some(StateCategory::Finished))]
    #[case::cancelled(JobState::Cancelled, Some(StateCategory::Finished))]
    #[case::failed(JobState::Failed, Some(StateCategory::Failed))]
    #[case::lost(JobState::Lost, Some(StateCategory::Failed))]
    #[case::deploy_failed(JobState::DeployFailed, Some(StateCategory::Failed))]
    #[case::unknown(JobState::Unknown, None)]
    fn category_of_each_state(#[case] state: JobState, #[case] expected: Option<StateCategory>) {
        assert_eq!(state.category(), expected);
    }

    #[test]
    fn each_known_state_has_exactly_one_flavour() {
        for state in JobState::ALL {
            let flags = [state.is_active(), state.is_pending(), state.is_failed()];
            let finished = state.is_stopped() && !state.is_failed();
            let count = flags.iter().filter(|f| **f).count() + usize::from(finished);
            let expected = usize::from(state != JobState::Unknown);
            assert_eq!(count, expected, "state={state:?}");
        }
    }

    #[test]
    fn failed_states_are_stopped() {
        for state in JobState::ALL.into_iter().filter(|s| s.is_failed()) {
            assert!(state.is_stopped(), "state={state:?}");
        }
    }

    #[test]
    fn serializes_as_pascal_case() {
        let s = serde_json::to_string(&JobState::DeployFailed).unwrap();
        assert_eq!(s, "\"DeployFailed\"");
    }

    #[test]
    fn unrecognised_state_becomes_unknown() {
        let state: JobState = serde_json::from_str("\"Suspended\"").unwrap();
        assert_eq!(state, JobState::Unknown);
        assert!(!state.is_active());
        assert!(!state.is_stopped());
    }
}
