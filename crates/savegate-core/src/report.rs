//! Lifecycle report: every verdict for one reconciliation pass.
//!
//! This is a serializable view for callers that want all decisions at once
//! (the CLI, logs, status conditions). Each field is computed by the same
//! policy function a caller could invoke on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{
    ClusterProperties, JobSpec, JobState, JobStatus, RevisionStatus, SavepointStatus,
    ha_config_map_name, is_high_availability_enabled,
};
use crate::error::SavegateError;
use crate::policy::{
    is_active, is_failed, is_pending, is_savepoint_up_to_date, is_stopped, is_terminated,
    should_restart, update_ready,
};
use crate::ports::Clock;

/// Input for one pass: whatever the reconciler observed, all parts optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSnapshot {
    pub status: Option<JobStatus>,
    pub spec: Option<JobSpec>,
    pub savepoint_status: Option<SavepointStatus>,
    pub revision_status: Option<RevisionStatus>,
    pub flink_properties: Option<ClusterProperties>,

    /// Reference time for the pass. Falls back to the caller's clock.
    pub observed_at: Option<DateTime<Utc>>,
}

impl JobSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SavegateError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleReport {
    pub observed_at: DateTime<Utc>,
    pub state: Option<JobState>,

    pub active: bool,
    pub pending: bool,
    pub failed: bool,
    pub stopped: bool,
    pub terminated: bool,

    /// Savepoint freshness as of `observed_at`.
    pub savepoint_up_to_date: bool,
    pub savepoint_failed: bool,
    pub should_restart: bool,

    pub update_triggered: bool,
    pub update_ready: bool,

    pub high_availability_enabled: bool,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub ha_config_map_name: String,
}

impl LifecycleReport {
    pub fn evaluate(snapshot: &JobSnapshot, clock: &dyn Clock) -> Self {
        let observed_at = snapshot.observed_at.unwrap_or_else(|| clock.now());
        let status = snapshot.status.as_ref();
        let spec = snapshot.spec.as_ref();
        let properties = snapshot.flink_properties.as_ref();

        let savepoint_up_to_date = status.is_some_and(|status| {
            let default_spec = JobSpec::default();
            is_savepoint_up_to_date(status, spec.unwrap_or(&default_spec), Some(observed_at))
        });

        let report = Self {
            observed_at,
            state: status.map(|s| s.state),
            active: is_active(status),
            pending: is_pending(status),
            failed: is_failed(status),
            stopped: is_stopped(status),
            terminated: is_terminated(status, spec),
            savepoint_up_to_date,
            savepoint_failed: SavepointStatus::is_failed(snapshot.savepoint_status.as_ref()),
            should_restart: should_restart(status, spec),
            update_triggered: snapshot
                .revision_status
                .as_ref()
                .is_some_and(RevisionStatus::is_update_triggered),
            update_ready: update_ready(status, spec, Some(observed_at)),
            high_availability_enabled: is_high_availability_enabled(properties),
            ha_config_map_name: ha_config_map_name(properties),
        };

        info!(
            state = ?report.state,
            should_restart = report.should_restart,
            update_ready = report.update_ready,
            terminated = report.terminated,
            "evaluated job lifecycle"
        );
        report
    }
}
