//! Observed status records written by the reconciler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::JobState;
use super::time::{format_timestamp, parse_timestamp};
use crate::error::SavegateError;

/// Last observed status of a job.
///
/// The reconciler updates each field independently as it observes events, so
/// the combination may be briefly inconsistent. Evaluators must tolerate that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobStatus {
    pub state: JobState,

    /// Latest known savepoint, empty when none has been recorded.
    pub savepoint_location: String,

    /// RFC 3339 time the savepoint was taken, empty when none has been recorded.
    pub savepoint_time: String,

    /// Set when the savepoint was taken while intentionally stopping the job.
    pub final_savepoint: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
}

impl JobStatus {
    pub fn new(state: JobState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn with_savepoint(mut self, location: impl Into<String>, taken_at: DateTime<Utc>) -> Self {
        self.savepoint_location = location.into();
        self.savepoint_time = format_timestamp(taken_at);
        self
    }

    /// Record a savepoint with a raw time string, as the reconciler may have written it.
    pub fn with_raw_savepoint(
        mut self,
        location: impl Into<String>,
        taken_at: impl Into<String>,
    ) -> Self {
        self.savepoint_location = location.into();
        self.savepoint_time = taken_at.into();
        self
    }

    pub fn with_final_savepoint(mut self, is_final: bool) -> Self {
        self.final_savepoint = is_final;
        self
    }

    pub fn with_completion_time(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completion_time = Some(completed_at);
        self
    }

    /// Both savepoint location and time are recorded.
    pub fn has_recorded_savepoint(&self) -> bool {
        !self.savepoint_location.is_empty() && !self.savepoint_time.is_empty()
    }

    /// A final savepoint must come with a location and a time.
    pub fn has_consistent_final_savepoint(&self) -> bool {
        !self.final_savepoint || self.has_recorded_savepoint()
    }

    /// Parsed `savepoint_time`, `Ok(None)` when nothing is recorded.
    pub fn parsed_savepoint_time(&self) -> Result<Option<DateTime<Utc>>, SavegateError> {
        if self.savepoint_time.is_empty() {
            return Ok(None);
        }
        parse_timestamp(&self.savepoint_time).map(Some)
    }
}

/// State of the most recent savepoint request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SavepointState {
    #[default]
    NotTriggered,
    Triggered,
    InProgress,
    Completed,
    TriggerFailed,
    Failed,

    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavepointStatus {
    pub state: SavepointState,
}

impl SavepointStatus {
    pub fn new(state: SavepointState) -> Self {
        Self { state }
    }

    /// The savepoint request could not be triggered or did not complete.
    /// An absent status is not a failure.
    pub fn is_failed(status: Option<&SavepointStatus>) -> bool {
        status.is_some_and(|s| {
            matches!(
                s.state,
                SavepointState::TriggerFailed | SavepointState::Failed
            )
        })
    }
}

/// Revision bookkeeping for spec updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevisionStatus {
    pub current_revision: String,
    pub next_revision: String,
}

impl RevisionStatus {
    pub fn new(current: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            current_revision: current.into(),
            next_revision: next.into(),
        }
    }

    /// A newer spec revision is waiting to be applied.
    pub fn is_update_triggered(&self) -> bool {
        self.current_revision != self.next_revision
    }
}
